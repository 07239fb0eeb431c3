use std::hint::black_box;

use catalog_explorer::filters::{FilterState, PriceBucket, evaluate};
use catalog_explorer::models::{DurationDays, Item, Price};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

const PLATFORMS: [&str; 4] = ["Windows", "macOS", "Android", "iOS"];

/// Generate a synthetic catalog; every tenth item is lifetime-priced
fn generate_items(num_items: usize) -> Vec<Item> {
    (0..num_items)
        .map(|i| Item {
            name: format!("Product {}", i),
            platforms: vec![PLATFORMS[i % 4].to_string(), PLATFORMS[(i + 1) % 4].to_string()],
            category: if i % 2 == 0 { "Internal" } else { "External" }.to_string(),
            access_mode: if i % 3 == 0 { "Keyed" } else { "Keyless" }.to_string(),
            status_tags: vec![if i % 5 == 0 { "Warning" } else { "Trending" }.to_string()],
            feature_tags: vec!["Multi-instance".to_string()],
            quality_score: (i % 101) as u8,
            summary: format!("Summary for product {}", i),
            details: String::new(),
            known_issues: vec![],
            price_label: String::new(),
            price: if i % 10 == 0 {
                Price::Lifetime
            } else {
                Price::Finite((i % 40) as f64 + 0.99)
            },
            duration: if i % 10 == 0 { DurationDays::Unlimited } else { DurationDays::Days(7) },
        })
        .collect()
}

fn bench_filter_application(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_application");

    // Search only (lowercase substring per item)
    for size in [1_000, 10_000, 50_000].iter() {
        let items = generate_items(*size);
        let state = FilterState { search_text: "Product 42".to_string(), ..Default::default() };

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("search", size), size, |b, _| {
            b.iter(|| evaluate(black_box(&items), black_box(&state)));
        });
    }

    // Multi-select groups (set lookups)
    for size in [1_000, 10_000, 50_000].iter() {
        let items = generate_items(*size);
        let mut state = FilterState::default();
        state.platforms.insert("macOS".to_string());
        state.platforms.insert("iOS".to_string());
        state.access_modes.insert("Keyless".to_string());

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("groups", size), size, |b, _| {
            b.iter(|| evaluate(black_box(&items), black_box(&state)));
        });
    }

    // Every predicate active
    for size in [1_000, 10_000, 50_000].iter() {
        let items = generate_items(*size);
        let mut state = FilterState {
            search_text: "product".to_string(),
            price_ceiling: 25.0,
            price_bucket: PriceBucket::Under20,
            include_lifetime: false,
            ..Default::default()
        };
        state.tags.insert("Trending".to_string());
        state.categories.insert("Internal".to_string());

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("all_predicates", size), size, |b, _| {
            b.iter(|| evaluate(black_box(&items), black_box(&state)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter_application);
criterion_main!(benches);

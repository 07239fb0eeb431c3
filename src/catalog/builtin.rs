use crate::models::{DurationDays, Item, Price};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Demo catalog used when no catalog file is configured
pub fn builtin_items() -> Vec<Item> {
    vec![
        Item {
            name: "Aether Decompiler".to_string(),
            platforms: strings(&["Windows", "macOS"]),
            category: "Internal".to_string(),
            access_mode: "Keyless".to_string(),
            status_tags: strings(&["Internal", "Trending"]),
            feature_tags: strings(&["Decompiler", "Multi-instance"]),
            quality_score: 97,
            summary: "Lightweight decompiler with fast analysis and multi-instance support."
                .to_string(),
            details: "Aether Decompiler offers symbol recovery, smart heuristics, and plugin \
                      support. Designed for performance on modern CPUs."
                .to_string(),
            known_issues: strings(&[
                "Minor UI lag on initial load",
                "Some heuristics false-positive in corner cases",
            ]),
            price_label: "$5.99 • 7 days".to_string(),
            price: Price::Finite(5.99),
            duration: DurationDays::Days(7),
        },
        Item {
            name: "KernelForge".to_string(),
            platforms: strings(&["Windows"]),
            category: "External".to_string(),
            access_mode: "Keyed".to_string(),
            status_tags: strings(&["Kernel", "Verified"]),
            feature_tags: strings(&["Kernel"]),
            quality_score: 88,
            summary: "Robust kernel-level hooking utilities for advanced tasks.".to_string(),
            details: "KernelForge provides a secure kernel driver, with fallback and safety \
                      checks. Intended for advanced users."
                .to_string(),
            known_issues: strings(&["Requires driver signing workaround on some systems"]),
            price_label: "$19.99 • 30 days".to_string(),
            price: Price::Finite(19.99),
            duration: DurationDays::Days(30),
        },
        Item {
            name: "Nebula AI Runner".to_string(),
            platforms: strings(&["Android", "iOS"]),
            category: "External".to_string(),
            access_mode: "Keyless".to_string(),
            status_tags: strings(&["AI", "Supports VNG"]),
            feature_tags: strings(&["Multi-instance", "Decompiler"]),
            quality_score: 92,
            summary: "AI-powered assistant for automated analysis and large-batch runs."
                .to_string(),
            details: "Nebula uses advanced ML to detect patterns and accelerate workflows. \
                      Cloud-backed features available."
                .to_string(),
            known_issues: strings(&["Cloud sync occasionally slow in AU region"]),
            price_label: "Lifetime".to_string(),
            price: Price::Lifetime,
            duration: DurationDays::Unlimited,
        },
        Item {
            name: "MiniCore".to_string(),
            platforms: strings(&["Windows", "Android"]),
            category: "Internal".to_string(),
            access_mode: "Keyless".to_string(),
            status_tags: strings(&["Internal", "Supports VNG"]),
            feature_tags: strings(&["Multi-instance"]),
            quality_score: 71,
            summary: "Compact executor focused on low-latency multi-instance runs.".to_string(),
            details: "MiniCore is optimized for low footprint and quick spins of many instances."
                .to_string(),
            known_issues: strings(&["Some incompatibility with older GPUs"]),
            price_label: "$3.99 • 3 days".to_string(),
            price: Price::Finite(3.99),
            duration: DurationDays::Days(3),
        },
        Item {
            name: "Sigma Suite".to_string(),
            platforms: strings(&["macOS"]),
            category: "External".to_string(),
            access_mode: "Keyed".to_string(),
            status_tags: strings(&["Warning"]),
            feature_tags: vec![],
            quality_score: 60,
            summary: "A feature-rich suite — use caution; active maintenance required.".to_string(),
            details: "Sigma Suite packs many tools but requires careful configuration and \
                      maintenance."
                .to_string(),
            known_issues: strings(&[
                "Known to conflict with some antivirus",
                "Setup can be complex",
            ]),
            price_label: "$12.00 • 14 days".to_string(),
            price: Price::Finite(12.0),
            duration: DurationDays::Days(14),
        },
    ]
}

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};

use crate::catalog::{Catalog, load_catalog};
use crate::filters::{FilterControls, FilterGroup, PriceBucket};
use crate::models::Item;
use crate::tui::run_interactive;
use crate::utils::{CatalogSource, resolve_catalog_source, sanitize_for_terminal};
use crate::view::{Session, render_page};

#[derive(Parser)]
#[command(name = "catalog-explorer")]
#[command(version = "0.1.0")]
#[command(about = "Filter and browse a catalog of priced items", long_about = None)]
pub struct Cli {
    /// Catalog file (JSON array of items); defaults to $CATALOG_EXPLORER_CATALOG,
    /// then the config directory, then the built-in demo catalog
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse the catalog interactively (default)
    Browse {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Print the items matching the filters, in catalog order
    List {
        #[command(flatten)]
        filters: FilterArgs,
        /// Print matching items as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a static HTML page of the filtered catalog
    Render {
        #[command(flatten)]
        filters: FilterArgs,
        /// Output file (stdout when omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Open the detail panel on this item
        #[arg(long, value_name = "NAME")]
        detail: Option<String>,
    },
    /// Show statistics about the catalog
    Stats,
}

/// Initial positions of the filter controls
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Case-insensitive substring of the item name
    #[arg(long)]
    pub search: Option<String>,
    /// Platform to include (repeatable)
    #[arg(long = "platform", value_name = "PLATFORM")]
    pub platforms: Vec<String>,
    /// Status tag to include (repeatable)
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,
    /// Category to include (repeatable)
    #[arg(long = "category", value_name = "CATEGORY")]
    pub categories: Vec<String>,
    /// Access mode to include (repeatable)
    #[arg(long = "access", value_name = "MODE")]
    pub access_modes: Vec<String>,
    /// Price ceiling (clamped to the catalog's maximum)
    #[arg(long, value_name = "AMOUNT")]
    pub max_price: Option<f64>,
    /// Price bucket: all, lt5, lt10, lt20, 20plus, lifetime
    #[arg(long, value_name = "BUCKET")]
    pub bucket: Option<PriceBucket>,
    /// Include lifetime-priced items
    #[arg(long)]
    pub include_lifetime: bool,
}

impl FilterArgs {
    /// Controls for `catalog` positioned by the flags
    pub fn to_controls(&self, catalog: &Catalog) -> FilterControls {
        let mut controls = FilterControls::new(catalog.price_ceiling_max());

        if let Some(search) = &self.search {
            controls.set_search(search);
        }
        for (group, values) in [
            (FilterGroup::Platform, &self.platforms),
            (FilterGroup::Tag, &self.tags),
            (FilterGroup::Category, &self.categories),
            (FilterGroup::AccessMode, &self.access_modes),
        ] {
            for value in values {
                controls.set_option(group, value, true);
            }
        }
        if let Some(max_price) = self.max_price {
            controls.set_price_ceiling(max_price);
        }
        if let Some(bucket) = self.bucket {
            controls.set_price_bucket(bucket);
        }
        // A bucket may already have forced this on; the flag only ever adds
        if self.include_lifetime {
            controls.set_include_lifetime(true);
        }

        controls
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let source = resolve_catalog_source(cli.catalog.as_deref());
    let catalog = load_catalog(&source)?;

    match cli.command {
        Some(Commands::Browse { filters }) => {
            let controls = filters.to_controls(&catalog);
            run_interactive(Session::with_controls(catalog, controls))?;
        }
        None => {
            run_interactive(Session::new(catalog))?;
        }
        Some(Commands::List { filters, json }) => {
            let controls = filters.to_controls(&catalog);
            list_items(&Session::with_controls(catalog, controls), json)?;
        }
        Some(Commands::Render { filters, output, detail }) => {
            let controls = filters.to_controls(&catalog);
            let mut session = Session::with_controls(catalog, controls);
            render(&mut session, output, detail.as_deref())?;
        }
        Some(Commands::Stats) => {
            show_stats(&catalog, &source);
        }
    }

    Ok(())
}

fn matched_items(session: &Session) -> Vec<&Item> {
    session.results().ids().iter().filter_map(|id| session.catalog().get(*id)).collect()
}

fn list_items(session: &Session, json: bool) -> Result<()> {
    let items = matched_items(session);

    if json {
        let text = serde_json::to_string_pretty(&items).context("Failed to serialize results")?;
        println!("{}", text);
        return Ok(());
    }

    if items.is_empty() {
        println!("No results");
        return Ok(());
    }

    for item in items {
        println!(
            "{} | {} | {}",
            sanitize_for_terminal(&item.name),
            sanitize_for_terminal(item.price_display()),
            sanitize_for_terminal(&item.platforms_display())
        );
    }

    Ok(())
}

fn render(session: &mut Session, output: Option<PathBuf>, detail: Option<&str>) -> Result<()> {
    if let Some(name) = detail {
        let Some(id) = session.catalog().find_by_name(name) else {
            bail!("No item named '{}' in the catalog", name);
        };
        session.select(id);
    }

    let page = render_page(session);
    match output {
        Some(path) => {
            fs::write(&path, page)
                .with_context(|| format!("Failed to write page to {}", path.display()))?;
            log::info!("Wrote {} results to {}", session.results().len(), path.display());
        }
        None => print!("{}", page),
    }

    Ok(())
}

fn show_stats(catalog: &Catalog, source: &CatalogSource) {
    println!("Catalog Statistics");
    println!("==================");
    println!("Source: {}", source);
    println!("Total items: {}", catalog.len());
    println!("  Lifetime items: {}", catalog.lifetime_count());

    match catalog.finite_price_range() {
        Some((min, max)) => println!("Price range: ${:.2} - ${:.2}", min, max),
        None => println!("Price range: n/a"),
    }
    println!("Price ceiling max: ${}", catalog.price_ceiling_max());

    for group in FilterGroup::ALL {
        let counts: Vec<String> = catalog
            .options(group)
            .iter()
            .map(|option| {
                let count = catalog
                    .items()
                    .iter()
                    .filter(|item| group.values_of(item).contains(option))
                    .count();
                format!("{} ({})", sanitize_for_terminal(option), count)
            })
            .collect();
        let joined = if counts.is_empty() { "none".to_string() } else { counts.join(", ") };
        println!("{}: {}", group.label(), joined);
    }
}

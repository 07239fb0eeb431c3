//! Static HTML rendering
//!
//! # Security: Markup Injection Prevention
//!
//! Catalog text may come from an untrusted file. Every interpolated value, including
//! attribute values and option labels, goes through [`escape_html`]. Nothing in this
//! module writes item text into markup any other way.

use std::fmt::Write as _;

use super::session::{ResultSet, Session, View};
use super::style::{FeatureIcon, StatusStyle};
use crate::catalog::Catalog;
use crate::filters::{FilterGroup, PriceBucket};
use crate::models::{Item, ItemId};

/// Escape `& < > " '` for use in element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// One item card in the result grid
pub fn render_card(item: &Item, id: ItemId) -> String {
    let mut html = String::new();
    let _ = write!(html, r#"<article class="card" data-index="{}">"#, id.0);

    html.push_str(r#"<div class="card-header">"#);
    let _ = write!(html, r#"<div class="product-name">{}</div>"#, escape_html(&item.name));
    html.push_str(r#"<div class="status-tags">"#);
    for tag in &item.status_tags {
        let class = StatusStyle::for_tag(tag).css_class();
        let class = if class.is_empty() {
            "small-tag".to_string()
        } else {
            format!("small-tag {}", class)
        };
        let _ = write!(html, r#"<span class="{}">{}</span>"#, class, escape_html(tag));
    }
    html.push_str("</div>");
    let _ = write!(html, r#"<div class="sunc">Quality {}%</div>"#, item.quality_score);
    html.push_str("</div>");

    html.push_str(r#"<div class="features-row">"#);
    for feature in &item.feature_tags {
        let icon = FeatureIcon::for_feature(feature);
        let _ = write!(
            html,
            r#"<svg class="feature-icon" viewBox="0 0 24 24"><title>{}</title><use href="{}"></use></svg>"#,
            escape_html(feature),
            icon.symbol_id()
        );
    }
    html.push_str("</div>");

    let _ = write!(
        html,
        r#"<div class="small">Platforms: {}</div>"#,
        escape_html(&item.platforms_display())
    );
    let _ = write!(html, r#"<p class="summary">{}</p>"#, escape_html(&item.summary));

    html.push_str(r#"<div class="card-footer">"#);
    let _ = write!(html, r#"<div class="price">{}</div>"#, escape_html(item.price_display()));
    let _ = write!(
        html,
        r#"<button class="info-btn" type="button" data-index="{}" disabled>Info</button>"#,
        id.0
    );
    html.push_str("</div></article>");
    html
}

/// Result grid plus the no-results block; exactly one of them is visible
pub fn render_results(catalog: &Catalog, results: &ResultSet) -> String {
    let mut html = String::from(r#"<section id="productGrid" class="grid">"#);
    for id in results.ids() {
        if let Some(item) = catalog.get(*id) {
            html.push_str(&render_card(item, *id));
        }
    }
    html.push_str("</section>");

    if results.is_empty() {
        html.push_str(
            r#"<div id="noResults" class="no-results">No products match your filters.</div>"#,
        );
    } else {
        html.push_str(
            r#"<div id="noResults" class="no-results" hidden>No products match your filters.</div>"#,
        );
    }
    html
}

/// Inner content of the detail panel
pub fn render_detail(item: &Item) -> String {
    let mut html = String::new();
    let _ = write!(html, "<h2>{}</h2>", escape_html(&item.name));
    section(&mut html, "Summary", &format!("<p>{}</p>", escape_html(&item.summary)));
    section(&mut html, "Full description", &format!("<p>{}</p>", escape_html(&item.details)));
    section(&mut html, "Features", &list(&item.feature_tags));
    section(&mut html, "Issues", &list(&item.known_issues));
    section(&mut html, "Pricing", &format!("<p>{}</p>", escape_html(item.price_display())));
    section(
        &mut html,
        "Metadata",
        &format!(r#"<p class="small">{}</p>"#, escape_html(&item.metadata_line())),
    );
    html
}

/// Detail overlay; hidden (`aria-hidden="true"`, empty content) when nothing is open
pub fn render_overlay(item: Option<&Item>) -> String {
    let (hidden, content) = match item {
        Some(item) => ("false", render_detail(item)),
        None => ("true", String::new()),
    };
    format!(
        concat!(
            r#"<div id="modalOverlay" class="modal-overlay" aria-hidden="{}">"#,
            r#"<div class="modal" role="dialog">"#,
            r#"<button id="modalCloseBtn" class="modal-close" type="button" disabled>Close</button>"#,
            r#"<div id="modalContent">{}</div></div></div>"#
        ),
        hidden, content
    )
}

fn section(html: &mut String, title: &str, body: &str) {
    let _ = write!(html, r#"<div class="modal-section"><strong>{}</strong>{}</div>"#, title, body);
}

/// Ordered list, rendered even when empty
fn list(entries: &[String]) -> String {
    let mut html = String::from("<ul>");
    for entry in entries {
        let _ = write!(html, "<li>{}</li>", escape_html(entry));
    }
    html.push_str("</ul>");
    html
}

/// Filter controls showing the session's positions; the page is a snapshot, so they are
/// rendered inside a disabled fieldset
fn render_controls(session: &Session) -> String {
    let catalog = session.catalog();
    let controls = session.controls();
    let mut html = String::from(r#"<aside class="filters"><fieldset class="controls" disabled>"#);

    let _ = write!(
        html,
        r#"<input id="searchInput" type="search" placeholder="Search by name" value="{}">"#,
        escape_html(controls.search_text())
    );

    for group in FilterGroup::ALL {
        let _ = write!(
            html,
            r#"<fieldset class="filter-group"><legend>{}</legend>"#,
            escape_html(group.label())
        );
        for option in catalog.options(group) {
            let checked = if controls.is_selected(group, &option) { " checked" } else { "" };
            let _ = write!(
                html,
                concat!(
                    r#"<label><input class="filter-checkbox" type="checkbox" "#,
                    r#"data-filter-group="{}" value="{}"{}> {}</label>"#
                ),
                group.key(),
                escape_html(&option),
                checked,
                escape_html(&option)
            );
        }
        html.push_str("</fieldset>");
    }

    let _ = write!(
        html,
        concat!(
            r#"<label>Max price <input id="priceRange" type="range" min="0" max="{}" step="1" "#,
            r#"value="{}"> <span id="priceMaxLabel">${}</span></label>"#
        ),
        controls.price_ceiling_max(),
        controls.price_ceiling(),
        controls.price_ceiling()
    );

    html.push_str(r#"<select id="priceDropdown">"#);
    for bucket in PriceBucket::ALL {
        let selected = if bucket == controls.price_bucket() { " selected" } else { "" };
        let _ = write!(
            html,
            r#"<option value="{}"{}>{}</option>"#,
            bucket.as_str(),
            selected,
            escape_html(bucket.label())
        );
    }
    html.push_str("</select>");

    let checked = if controls.include_lifetime() { " checked" } else { "" };
    let _ = write!(
        html,
        r#"<label><input id="includeLifetime" type="checkbox"{}> Include lifetime</label>"#,
        checked
    );
    html.push_str(r#"<button id="resetFilters" type="button">Reset</button></fieldset></aside>"#);
    html
}

const ICON_SPRITE: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" style="display:none">"#,
    r#"<symbol id="icon-decompiler" viewBox="0 0 24 24"><path d="M8 4 2 12l6 8M16 4l6 8-6 8"/></symbol>"#,
    r#"<symbol id="icon-multi" viewBox="0 0 24 24"><rect x="3" y="7" width="12" height="12"/><rect x="9" y="3" width="12" height="12"/></symbol>"#,
    r#"<symbol id="icon-kernel" viewBox="0 0 24 24"><rect x="6" y="6" width="12" height="12"/><path d="M9 2v4M15 2v4M9 18v4M15 18v4"/></symbol>"#,
    r#"<symbol id="icon-info" viewBox="0 0 24 24"><circle cx="12" cy="12" r="10"/><path d="M12 11v6M12 7v1"/></symbol>"#,
    "</svg>"
);

/// Standalone page: controls reflecting the session state, results, and detail overlay
pub fn render_page(session: &Session) -> String {
    let mut page = String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>Catalog</title>\n\
         <!-- Snapshot of one filter state; the controls are read-only -->\n</head>\n<body>\n",
    );
    page.push_str(ICON_SPRITE);
    page.push('\n');
    page.push_str(&render_controls(session));
    page.push('\n');
    page.push_str(r#"<main>"#);
    page.push_str(&render_results(session.catalog(), session.results()));
    page.push_str("</main>\n");
    page.push_str(&render_overlay(session.detail_item()));
    page.push_str("\n</body>\n</html>\n");
    page
}

/// Renderer that keeps the latest markup for each region
///
/// `results_html` stays `None` until the session first renders, which keeps
/// "not yet rendered" distinct from an empty result.
#[derive(Debug, Default)]
pub struct HtmlView {
    pub results_html: Option<String>,
    pub overlay_html: Option<String>,
}

impl View for HtmlView {
    fn show_results(&mut self, catalog: &Catalog, results: &ResultSet) {
        self.results_html = Some(render_results(catalog, results));
    }

    fn show_detail(&mut self, catalog: &Catalog, open: Option<ItemId>) {
        let item = open.and_then(|id| catalog.get(id));
        self.overlay_html = Some(render_overlay(item));
    }
}

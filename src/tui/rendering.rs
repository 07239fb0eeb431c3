use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};

use super::app::{Focus, MessageType, StatusMessage};
use super::layout::{AppLayout, detail_popup_area};
use crate::catalog::Catalog;
use crate::filters::{FilterControls, FilterGroup};
use crate::models::{Item, ItemId};
use crate::utils::{sanitize_for_terminal, truncate_for_terminal};
use crate::view::{FeatureIcon, StatusStyle};

const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const EMERALD: Color = Color::Rgb(16, 185, 129);
const RED: Color = Color::Rgb(239, 68, 68);
const AMBER: Color = Color::Rgb(245, 158, 11);
const BAR_BG: Color = Color::Rgb(24, 24, 27);

/// Everything one frame needs
pub struct RenderState<'a> {
    pub catalog: &'a Catalog,
    pub controls: &'a FilterControls,
    pub results: &'a [ItemId],
    pub selected_idx: usize,
    pub focus: Focus,
    pub filter_options: &'a [(FilterGroup, String)],
    pub filter_cursor: usize,
    pub detail: Option<&'a Item>,
    pub status_message: Option<&'a StatusMessage>,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = AppLayout::new(frame.area());

    render_search_box(frame, layout.search_area, state.controls.search_text());
    render_filters(frame, layout.filters_area, state);
    render_results_list(frame, layout.results_area, state);
    render_status_bar(frame, layout.status_area, state);

    if let Some(item) = state.detail {
        render_detail(frame, detail_popup_area(frame.area()), item);
    }
}

fn border_block(title: &str, focused: bool) -> Block<'_> {
    let color = if focused { EMERALD } else { MUTED };
    Block::default().borders(Borders::ALL).border_style(Style::default().fg(color)).title(title)
}

fn status_color(tag: &str) -> Color {
    match StatusStyle::for_tag(tag) {
        StatusStyle::Internal => EMERALD,
        StatusStyle::Warning => RED,
        StatusStyle::Trending => AMBER,
        StatusStyle::Plain => MUTED,
    }
}

fn render_search_box(frame: &mut Frame, area: Rect, search_text: &str) {
    let content = if search_text.is_empty() {
        Line::from(Span::styled("Type to search by name", Style::default().fg(MUTED)))
    } else {
        Line::from(sanitize_for_terminal(search_text))
    };

    let paragraph = Paragraph::new(content).block(border_block(" Search ", false));
    frame.render_widget(paragraph, area);
}

fn render_filters(frame: &mut Frame, area: Rect, state: &RenderState) {
    let focused = state.focus == Focus::Filters;
    let mut lines = Vec::new();
    let mut cursor_line = 0;
    let mut current_group = None;

    for (idx, (group, value)) in state.filter_options.iter().enumerate() {
        if current_group != Some(*group) {
            if current_group.is_some() {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(
                group.label(),
                Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD),
            )));
            current_group = Some(*group);
        }

        let mark = if state.controls.is_selected(*group, value) { "[x]" } else { "[ ]" };
        let text = format!("{} {}", mark, sanitize_for_terminal(value));
        let style = if focused && idx == state.filter_cursor {
            Style::default().fg(BRIGHT).bg(EMERALD).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED)
        };
        if idx == state.filter_cursor {
            cursor_line = lines.len();
        }
        lines.push(Line::from(Span::styled(text, style)));
    }

    let controls = state.controls;
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Max price: ", Style::default().fg(MUTED)),
        Span::raw(format!(
            "${:.0} / ${:.0}",
            controls.price_ceiling(),
            controls.price_ceiling_max()
        )),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Bucket: ", Style::default().fg(MUTED)),
        Span::raw(controls.price_bucket().label()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Lifetime: ", Style::default().fg(MUTED)),
        Span::raw(if controls.include_lifetime() { "included" } else { "excluded" }),
    ]));

    // Keep the cursor row visible inside the bordered area
    let visible = area.height.saturating_sub(2) as usize;
    let offset = if visible == 0 { 0 } else { cursor_line.saturating_sub(visible - 1) };

    let paragraph = Paragraph::new(Text::from(lines))
        .block(border_block(" Filters ", focused))
        .scroll((offset as u16, 0));
    frame.render_widget(paragraph, area);
}

fn result_line(item: &Item) -> Line<'static> {
    let mut spans = vec![
        Span::raw(truncate_for_terminal(&sanitize_for_terminal(&item.name), 32)),
        Span::raw("  "),
        Span::raw(sanitize_for_terminal(item.price_display())),
    ];

    for tag in &item.status_tags {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!("[{}]", sanitize_for_terminal(tag)),
            Style::default().fg(status_color(tag)),
        ));
    }

    let glyphs: String =
        item.feature_tags.iter().map(|f| FeatureIcon::for_feature(f).glyph()).collect();
    if !glyphs.is_empty() {
        spans.push(Span::raw(format!(" {}", glyphs)));
    }

    spans.push(Span::raw(format!(" | {}", sanitize_for_terminal(&item.platforms_display()))));
    Line::from(spans)
}

fn render_results_list(frame: &mut Frame, area: Rect, state: &RenderState) {
    let focused = state.focus == Focus::Results;
    let title = format!(" Results ({}) ", state.results.len());

    if state.results.is_empty() {
        let paragraph = Paragraph::new(Text::from(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No results",
                Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Adjust the search or filters, or press Ctrl+R to reset",
                Style::default().fg(MUTED),
            )),
        ]))
        .block(border_block(&title, focused));
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = state
        .results
        .iter()
        .filter_map(|id| state.catalog.get(*id))
        .enumerate()
        .map(|(idx, item)| {
            let style = if idx == state.selected_idx {
                Style::default()
                    .fg(BRIGHT) // Bright text
                    .bg(EMERALD) // Emerald background
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED) // Muted text
            };
            ListItem::new(result_line(item)).style(style)
        })
        .collect();

    let list = List::new(items).block(border_block(&title, focused));
    let mut list_state = ListState::default().with_selected(Some(state.selected_idx));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &'a str) {
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        title,
        Style::default().fg(MUTED).add_modifier(Modifier::BOLD),
    )));
}

fn render_detail(frame: &mut Frame, area: Rect, item: &Item) {
    let mut lines = vec![Line::from(Span::styled(
        sanitize_for_terminal(&item.name),
        Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD),
    ))];

    section(&mut lines, "Summary");
    lines.push(Line::from(sanitize_for_terminal(&item.summary)));

    section(&mut lines, "Full description");
    for line in sanitize_for_terminal(&item.details).lines() {
        lines.push(Line::from(line.to_string()));
    }

    section(&mut lines, "Features");
    for feature in &item.feature_tags {
        let glyph = FeatureIcon::for_feature(feature).glyph();
        lines.push(Line::from(format!("  {} {}", glyph, sanitize_for_terminal(feature))));
    }

    section(&mut lines, "Issues");
    for issue in &item.known_issues {
        lines.push(Line::from(format!("  - {}", sanitize_for_terminal(issue))));
    }

    section(&mut lines, "Pricing");
    lines.push(Line::from(sanitize_for_terminal(item.price_display())));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        sanitize_for_terminal(&item.metadata_line()),
        Style::default().fg(MUTED),
    )));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(border_block(" Details (Enter/Esc: close, Ctrl+Y: copy) ", true))
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let default_style = Style::default().fg(BRIGHT).bg(BAR_BG);

    let (status_text, style) = if let Some(msg) = state.status_message {
        let color = match msg.message_type {
            MessageType::Success => EMERALD,
            MessageType::Error => RED,
        };
        (format!(" {} ", msg.text), Style::default().fg(color).bg(BAR_BG))
    } else if state.results.is_empty() {
        (
            " No results | Ctrl+R: reset | Esc: clear | Ctrl+C: quit ".to_string(),
            default_style,
        )
    } else {
        let mut parts = vec![];

        parts.push(format!("{}/{} items", state.results.len(), state.catalog.len()));
        parts.push(format!("item {}/{}", state.selected_idx + 1, state.results.len()));
        if state.controls.is_active() {
            parts.push("filters active".to_string());
        }
        parts.push("Tab: focus".to_string());
        parts.push("←/→: price".to_string());
        parts.push("Ctrl+B: bucket".to_string());
        parts.push("Ctrl+L: lifetime".to_string());
        parts.push("Ctrl+C: quit".to_string());

        (format!(" {} ", parts.join(" | ")), default_style)
    };

    let paragraph = Paragraph::new(status_text).style(style);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn draw(catalog: &Catalog, results: &[ItemId], detail: Option<&Item>, search: &str) -> String {
        let mut controls = FilterControls::new(catalog.price_ceiling_max());
        controls.set_search(search);
        let options: Vec<(FilterGroup, String)> = FilterGroup::ALL
            .iter()
            .flat_map(|g| catalog.options(*g).into_iter().map(move |v| (*g, v)))
            .collect();

        let state = RenderState {
            catalog,
            controls: &controls,
            results,
            selected_idx: 0,
            focus: Focus::Results,
            filter_options: &options,
            filter_cursor: 0,
            detail,
            status_message: None,
        };

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| render_ui(f, &state)).unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn test_render_ui_with_results() {
        let catalog = Catalog::builtin();
        let text = draw(&catalog, &[ItemId(0), ItemId(1)], None, "");

        assert!(text.contains("Aether Decompiler"));
        assert!(text.contains("KernelForge"));
        assert!(text.contains("Results (2)"));
        assert!(text.contains("2/5 items"));
        assert!(text.contains("[ ] Windows"));
    }

    #[test]
    fn test_render_ui_empty_results_shows_message() {
        let catalog = Catalog::builtin();
        let text = draw(&catalog, &[], None, "zzz");

        assert!(text.contains("No results"));
        assert!(text.contains("zzz"));
    }

    #[test]
    fn test_render_detail_popup() {
        let catalog = Catalog::builtin();
        let item = &catalog.items()[1];
        let text = draw(&catalog, &[ItemId(1)], Some(item), "");

        assert!(text.contains("Full description"));
        assert!(text.contains("Issues"));
        assert!(text.contains("Category: External"));
    }

    #[test]
    fn test_render_strips_escape_sequences() {
        let mut item = Catalog::builtin().items()[0].clone();
        item.name = "Evil\x1b[2JName".to_string();
        let catalog = Catalog::new(vec![item]).unwrap();
        let text = draw(&catalog, &[ItemId(0)], None, "");

        assert!(text.contains("EvilName"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_render_status_message() {
        let catalog = Catalog::builtin();
        let controls = FilterControls::new(catalog.price_ceiling_max());
        let msg = StatusMessage {
            text: "✓ Copied to clipboard".to_string(),
            message_type: MessageType::Success,
            expires_at: Instant::now(),
        };
        let state = RenderState {
            catalog: &catalog,
            controls: &controls,
            results: &[ItemId(0)],
            selected_idx: 0,
            focus: Focus::Filters,
            filter_options: &[],
            filter_cursor: 0,
            detail: None,
            status_message: Some(&msg),
        };

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render_ui(f, &state)).unwrap();
        assert!(buffer_text(&terminal).contains("Copied to clipboard"));
    }

    #[test]
    fn test_render_tiny_terminal_does_not_panic() {
        let catalog = Catalog::builtin();
        let controls = FilterControls::new(catalog.price_ceiling_max());
        let state = RenderState {
            catalog: &catalog,
            controls: &controls,
            results: &[ItemId(0)],
            selected_idx: 0,
            focus: Focus::Results,
            filter_options: &[],
            filter_cursor: 0,
            detail: catalog.get(ItemId(0)),
            status_message: None,
        };

        let mut terminal = Terminal::new(TestBackend::new(10, 3)).unwrap();
        terminal.draw(|f| render_ui(f, &state)).unwrap();
    }
}

//! TUI application state and event handling.
//!
//! The `App` owns a [`Session`] and a [`Screen`] (the terminal's [`View`]). Key presses
//! become [`UiEvent`]s, the session re-evaluates the catalog and pushes the new result
//! set back into the screen, and the next frame draws it.
//!
//! - **Focus**: Tab switches between the results list and the filter sidebar
//! - **Detail panel**: Enter opens the selected item; Enter, Esc or a click outside closes it
//! - **Status messages**: Transient feedback for clipboard operations and errors
//! - **Dirty state tracking**: Redraw only when state changes

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::layout::{Position, Rect};

use super::events::{Action, poll_event};
use super::layout::detail_popup_area;
use super::rendering::{RenderState, render_ui};
use crate::catalog::Catalog;
use crate::clipboard::copy_item_details;
use crate::filters::FilterGroup;
use crate::models::{Item, ItemId};
use crate::view::{CloseReason, ResultSet, Session, UiEvent, View};

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;
/// Price ceiling change per arrow key press
const CEILING_STEP: f64 = 1.0;

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

/// Pane that receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Results,
    Filters,
}

/// What the terminal currently shows, as pushed by the session
#[derive(Debug, Default)]
pub struct Screen {
    results: Option<Vec<ItemId>>,
    detail: Option<ItemId>,
}

impl Screen {
    pub fn results(&self) -> &[ItemId] {
        self.results.as_deref().unwrap_or(&[])
    }

    pub fn detail(&self) -> Option<ItemId> {
        self.detail
    }
}

impl View for Screen {
    fn show_results(&mut self, _catalog: &Catalog, results: &ResultSet) {
        self.results = Some(results.ids().to_vec());
    }

    fn show_detail(&mut self, _catalog: &Catalog, open: Option<ItemId>) {
        self.detail = open;
    }
}

pub struct App {
    session: Session,
    screen: Screen,
    focus: Focus,
    selected_idx: usize,
    // Flattened (group, option) rows of the filter sidebar
    filter_options: Vec<(FilterGroup, String)>,
    filter_cursor: usize,
    should_quit: bool,
    status_message: Option<StatusMessage>,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
    // Frame size of the last draw, used to hit-test mouse clicks
    last_area: Rect,
}

impl App {
    pub fn new(session: Session) -> Self {
        let filter_options = FilterGroup::ALL
            .iter()
            .flat_map(|group| {
                session.catalog().options(*group).into_iter().map(move |value| (*group, value))
            })
            .collect();

        let mut screen = Screen::default();
        session.start(&mut screen);

        Self {
            session,
            screen,
            focus: Focus::Results,
            selected_idx: 0,
            filter_options,
            filter_cursor: 0,
            should_quit: false,
            status_message: None,
            needs_redraw: true, // Initial draw needed
            last_draw_time: Instant::now(),
            last_area: Rect::default(),
        }
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    /// Check and clear expired status messages
    fn check_and_clear_expired_status(&mut self) {
        let should_clear = self
            .status_message
            .as_ref()
            .map(|msg| Instant::now() >= msg.expires_at)
            .unwrap_or(false);
        if should_clear {
            self.status_message = None;
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            // Clear expired status messages (marks dirty if cleared)
            let had_status = self.status_message.is_some();
            self.check_and_clear_expired_status();
            if had_status && self.status_message.is_none() {
                self.needs_redraw = true;
            }

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                let mut area = self.last_area;
                terminal.draw(|f| {
                    area = f.area();
                    render_ui(f, &self.render_state());
                })?;
                self.last_area = area;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            // Handle events
            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    fn render_state(&self) -> RenderState<'_> {
        RenderState {
            catalog: self.session.catalog(),
            controls: self.session.controls(),
            results: self.screen.results(),
            selected_idx: self.selected_idx,
            focus: self.focus,
            filter_options: &self.filter_options,
            filter_cursor: self.filter_cursor,
            detail: self.detail_item(),
            status_message: self.status_message.as_ref(),
        }
    }

    fn detail_item(&self) -> Option<&Item> {
        self.screen.detail().and_then(|id| self.session.catalog().get(id))
    }

    fn selected_item_id(&self) -> Option<ItemId> {
        self.screen.results().get(self.selected_idx).copied()
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Cancel => {
                if self.screen.detail().is_some() {
                    self.dispatch(UiEvent::CloseRequested(CloseReason::Escape));
                } else if !self.session.controls().search_text().is_empty() {
                    self.dispatch_filter(UiEvent::SearchChanged(String::new()));
                } else {
                    self.should_quit = true;
                }
            }
            Action::MoveUp => self.move_cursor(-1),
            Action::MoveDown => self.move_cursor(1),
            Action::PageUp => self.move_cursor(-10),
            Action::PageDown => self.move_cursor(10),
            Action::ToggleFocus => {
                self.focus = match self.focus {
                    Focus::Results => Focus::Filters,
                    Focus::Filters => Focus::Results,
                };
                self.needs_redraw = true;
            }
            Action::Activate => self.activate(),
            Action::CycleBucket => {
                let next = self.session.controls().price_bucket().next();
                self.dispatch_filter(UiEvent::BucketChanged(next));
            }
            Action::ToggleLifetime => {
                let include = !self.session.controls().include_lifetime();
                self.dispatch_filter(UiEvent::IncludeLifetimeChanged(include));
            }
            Action::LowerCeiling => self.dispatch_filter(UiEvent::CeilingStepped(-CEILING_STEP)),
            Action::RaiseCeiling => self.dispatch_filter(UiEvent::CeilingStepped(CEILING_STEP)),
            Action::Reset => self.dispatch_filter(UiEvent::Reset),
            Action::CopyToClipboard => self.copy_current(),
            Action::UpdateSearch(c) => self.dispatch_filter(UiEvent::SearchCharTyped(c)),
            Action::DeleteChar => self.dispatch_filter(UiEvent::SearchCharDeleted),
            Action::Click { column, row } => self.click(column, row),
            Action::None => {}
        }
    }

    /// Forward an event to the session; the screen receives whatever it pushes
    fn dispatch(&mut self, event: UiEvent) {
        self.session.dispatch(event, &mut self.screen);
        self.needs_redraw = true;
    }

    /// Forward a filter-changing event; only a re-evaluated result set moves the selection
    /// back to the top
    fn dispatch_filter(&mut self, event: UiEvent) {
        if self.session.dispatch(event, &mut self.screen) {
            self.selected_idx = 0;
            self.needs_redraw = true;
        }
    }

    fn activate(&mut self) {
        if self.screen.detail().is_some() {
            self.dispatch(UiEvent::CloseRequested(CloseReason::CloseButton));
            return;
        }

        match self.focus {
            Focus::Results => {
                if let Some(id) = self.selected_item_id() {
                    self.dispatch(UiEvent::ItemSelected(id));
                }
            }
            Focus::Filters => {
                if let Some((group, value)) = self.filter_options.get(self.filter_cursor).cloned()
                {
                    self.dispatch_filter(UiEvent::OptionFlipped { group, value });
                }
            }
        }
    }

    fn copy_current(&mut self) {
        let target = self.screen.detail().or_else(|| self.selected_item_id());
        let Some(item) = target.and_then(|id| self.session.catalog().get(id)) else {
            self.set_status("✗ No item to copy", MessageType::Error, STATUS_ERROR_DURATION_MS);
            return;
        };

        match copy_item_details(item) {
            Ok(()) => {
                self.set_status(
                    "✓ Copied to clipboard",
                    MessageType::Success,
                    STATUS_SUCCESS_DURATION_MS,
                );
            }
            Err(e) => {
                log::debug!("Clipboard copy failed: {:#}", e);
                self.set_status(
                    format!("✗ Clipboard error: {}", e),
                    MessageType::Error,
                    STATUS_ERROR_DURATION_MS,
                );
            }
        }
    }

    fn click(&mut self, column: u16, row: u16) {
        if self.screen.detail().is_none() {
            return;
        }
        let inside_content = detail_popup_area(self.last_area).contains(Position::new(column, row));
        self.dispatch(UiEvent::OverlayClicked { inside_content });
    }

    fn move_cursor(&mut self, delta: isize) {
        match self.focus {
            Focus::Results => {
                let total = self.screen.results().len();
                self.selected_idx = self.moved(self.selected_idx, delta, total);
            }
            Focus::Filters => {
                let total = self.filter_options.len();
                self.filter_cursor = self.moved(self.filter_cursor, delta, total);
            }
        }
    }

    fn moved(&mut self, idx: usize, delta: isize, total: usize) -> usize {
        if total == 0 {
            return 0;
        }

        let new_idx = (idx as isize + delta).max(0) as usize;
        let new_idx = new_idx.min(total - 1);

        if new_idx != idx {
            self.needs_redraw = true;
        }
        new_idx
    }
}

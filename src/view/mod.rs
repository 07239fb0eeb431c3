//! View boundary: everything between the filter engine and a concrete renderer.
//!
//! - [`Session`] - Owns the catalog, filter controls and detail panel; turns [`UiEvent`]s
//!   into re-evaluations and pushes the output to a [`View`]
//! - [`View`] - Capability interface a renderer implements (results list, detail panel)
//! - [`DetailPanel`] - Closed / open-on-one-item state machine
//! - [`style`] - Status tag styles and feature icons, with fallbacks
//! - [`html`] - Static HTML renderer with markup escaping
//!
//! The interactive terminal renderer lives in `crate::tui` and implements the same trait.

pub mod detail;
pub mod html;
pub mod session;
pub mod style;

pub use detail::{CloseReason, DetailPanel};
pub use html::{HtmlView, escape_html, render_page};
pub use session::{ResultSet, Session, UiEvent, View};
pub use style::{FeatureIcon, StatusStyle};

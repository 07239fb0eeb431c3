//! Interactive terminal browser over a [`Session`].
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;

use anyhow::Result;
pub use app::App;
use terminal::TerminalManager;

use crate::view::Session;

/// Run the interactive TUI until the user quits
pub fn run_interactive(session: Session) -> Result<()> {
    let mut manager = TerminalManager::new()?;
    let mut app = App::new(session);

    let res = app.run(manager.terminal_mut());

    manager.restore()?;
    res
}

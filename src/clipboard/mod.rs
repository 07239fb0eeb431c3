//! Clipboard export of an item's full record.

use anyhow::{Context, Result, bail};
use arboard::Clipboard;

use crate::models::Item;
use crate::utils::sanitize_for_terminal;

/// Largest export accepted (1MB); an item record is far smaller than this
const MAX_EXPORT_BYTES: usize = 1024 * 1024;

/// Destination for copied text (mocked in tests)
trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard via arboard
struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        Ok(Self { clipboard })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.clipboard.set_text(text).context("Failed to set clipboard contents")?;
        Ok(())
    }
}

/// Text placed on the clipboard for an item: its plain-text record without control sequences
pub fn export_text(item: &Item) -> Result<String> {
    let text = sanitize_for_terminal(&item.detail_text());
    if text.len() > MAX_EXPORT_BYTES {
        bail!(
            "Item record too large for clipboard ({} bytes, max {})",
            text.len(),
            MAX_EXPORT_BYTES
        );
    }
    Ok(text)
}

#[cfg(test)]
fn copy_with_provider(item: &Item, provider: &mut dyn ClipboardProvider) -> Result<()> {
    let text = export_text(item)?;
    provider.set_text(&text)
}

/// Copy an item's full record to the system clipboard
///
/// # Errors
/// Returns an error if the record is oversized or the system clipboard is unavailable
/// (headless session, no display server, access denied).
pub fn copy_item_details(item: &Item) -> Result<()> {
    // Build the text first so oversized records fail before touching the clipboard
    let text = export_text(item)?;
    let mut clipboard = SystemClipboard::new()?;
    clipboard.set_text(&text)
}

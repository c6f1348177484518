//! System clipboard access for the copy widget.
//!
//! Uses `arboard` for cross-platform clipboard support. A fresh handle is
//! created per copy so nothing is held between calls.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy `text` to the system clipboard.
///
/// Fails when no clipboard is available, e.g. in a headless session.
pub fn copy_text(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Clipboard unavailable")?;
    clipboard
        .set_text(text)
        .context("Failed to write clipboard text")?;
    Ok(())
}

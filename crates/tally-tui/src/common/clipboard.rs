//! System clipboard access.

use anyhow::Result;

/// Thin wrapper over the system clipboard.
pub struct Clipboard;

impl Clipboard {
    /// Copies `text` to the system clipboard.
    ///
    /// Clipboard access can fail on headless systems; callers treat failure
    /// as non-fatal.
    pub fn copy(text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text.to_string())?;
        Ok(())
    }
}

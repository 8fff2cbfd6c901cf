//! System clipboard access for the copy action.

use arboard::Clipboard;

/// Handle over the system clipboard.
pub struct ClipboardHandler {
    clipboard: Clipboard,
}

impl ClipboardHandler {
    /// Open the system clipboard.
    ///
    /// Fails when no clipboard is reachable (e.g. no display server).
    pub fn new() -> Result<Self, arboard::Error> {
        let clipboard = Clipboard::new()?;
        Ok(Self { clipboard })
    }

    /// Store `text` on the clipboard.
    pub fn set_text(&mut self, text: &str) -> Result<(), arboard::Error> {
        self.clipboard.set_text(text.to_string())
    }
}

/// One-shot write, used by copy worker threads.
pub fn write_text(text: &str) -> Result<(), arboard::Error> {
    ClipboardHandler::new()?.set_text(text)
}

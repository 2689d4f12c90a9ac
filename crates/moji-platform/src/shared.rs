use std::sync::Mutex;

use moji_core::{MojiError, MojiResult};

use crate::traits::ClipboardAccess;

/// Cross-platform clipboard using arboard
pub struct ArboardClipboard {
    clipboard: Mutex<arboard::Clipboard>,
}

impl ArboardClipboard {
    pub fn new() -> MojiResult<Self> {
        let clipboard =
            arboard::Clipboard::new().map_err(|e| MojiError::Clipboard(e.to_string()))?;
        Ok(Self {
            clipboard: Mutex::new(clipboard),
        })
    }
}

impl ClipboardAccess for ArboardClipboard {
    fn get_text(&self) -> MojiResult<String> {
        self.clipboard
            .lock()
            .map_err(|e| MojiError::Clipboard(e.to_string()))?
            .get_text()
            .map_err(|e| MojiError::Clipboard(e.to_string()))
    }

    fn set_text(&self, content: &str) -> MojiResult<()> {
        self.clipboard
            .lock()
            .map_err(|e| MojiError::Clipboard(e.to_string()))?
            .set_text(content)
            .map_err(|e| MojiError::Clipboard(e.to_string()))
    }
}

/// Stand-in when no system clipboard could be opened; every access fails
pub struct UnavailableClipboard {
    reason: String,
}

impl UnavailableClipboard {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl ClipboardAccess for UnavailableClipboard {
    fn get_text(&self) -> MojiResult<String> {
        Err(MojiError::Clipboard(self.reason.clone()))
    }

    fn set_text(&self, _content: &str) -> MojiResult<()> {
        Err(MojiError::Clipboard(self.reason.clone()))
    }
}

/// Process-local clipboard, for tests and headless runs
#[derive(Default)]
pub struct MemoryClipboard {
    content: Mutex<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardAccess for MemoryClipboard {
    fn get_text(&self) -> MojiResult<String> {
        self.content
            .lock()
            .map(|c| c.clone())
            .map_err(|e| MojiError::Clipboard(e.to_string()))
    }

    fn set_text(&self, content: &str) -> MojiResult<()> {
        let mut guard = self
            .content
            .lock()
            .map_err(|e| MojiError::Clipboard(e.to_string()))?;
        *guard = content.to_string();
        Ok(())
    }
}

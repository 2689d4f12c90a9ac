use moji_core::{MojiError, MojiResult};

use crate::shared::{ArboardClipboard, UnavailableClipboard};

/// Read/write system clipboard
pub trait ClipboardAccess: Send + Sync {
    fn get_text(&self) -> MojiResult<String>;
    fn set_text(&self, content: &str) -> MojiResult<()>;
}

/// Aggregate struct holding the platform-specific implementations
pub struct Platform {
    pub clipboard: Box<dyn ClipboardAccess>,
}

impl Platform {
    /// Create a Platform backed by the system clipboard.
    ///
    /// Sessions without a clipboard (no display server) still get a
    /// Platform; copying then fails per action instead of at startup.
    pub fn current() -> Self {
        let clipboard: Box<dyn ClipboardAccess> = match ArboardClipboard::new() {
            Ok(clipboard) => Box::new(clipboard),
            Err(e) => {
                tracing::warn!("System clipboard unavailable: {}", e);
                let reason = match e {
                    MojiError::Clipboard(reason) => reason,
                    other => other.to_string(),
                };
                Box::new(UnavailableClipboard::new(reason))
            }
        };
        Self { clipboard }
    }

    pub fn with_clipboard(clipboard: impl ClipboardAccess + 'static) -> Self {
        Self {
            clipboard: Box::new(clipboard),
        }
    }
}

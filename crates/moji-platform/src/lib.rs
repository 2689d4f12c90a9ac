//! Platform services used by the Moji window.

mod shared;
mod traits;

pub use shared::{ArboardClipboard, MemoryClipboard, UnavailableClipboard};
pub use traits::{ClipboardAccess, Platform};

use std::sync::Arc;
use std::time::Duration;

use iced::Task;

use moji_core::{CopyTarget, FeedbackId};
use moji_platform::Platform;

use crate::app::Message;

/// Write the tile's emoji to the clipboard off the update path
pub fn copy_task(platform: &Arc<Platform>, target: CopyTarget) -> Task<Message> {
    Task::perform(copy_emoji(Arc::clone(platform), target), |message| message)
}

/// Expire a "Copied!" marker once `duration` has passed
pub fn feedback_task(id: FeedbackId, duration: Duration) -> Task<Message> {
    Task::perform(expire_after(id, duration), |message| message)
}

pub async fn copy_emoji(platform: Arc<Platform>, target: CopyTarget) -> Message {
    let result = platform.clipboard.set_text(&target.emoji).map_err(|e| {
        tracing::warn!("Clipboard copy failed: {}", e);
        e.to_string()
    });
    Message::CopyFinished(target, result)
}

pub async fn expire_after(id: FeedbackId, duration: Duration) -> Message {
    tokio::time::sleep(duration).await;
    Message::FeedbackExpired(id)
}

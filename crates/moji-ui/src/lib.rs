mod app;
mod copy;
pub mod style;
pub mod widgets;

pub use app::{EmojiSearch, Message};

use moji_core::{Config, SearchApi};
use moji_platform::Platform;

pub fn run(config: Config, platform: Platform, api: SearchApi) -> iced::Result {
    let window_width = config.appearance.window_width as f32;

    iced::application("Moji", app::EmojiSearch::update, app::EmojiSearch::view)
        .theme(app::EmojiSearch::theme)
        .window_size(iced::Size::new(window_width, 480.0))
        .transparent(true)
        .position(iced::window::Position::Centered)
        .run_with(move || app::EmojiSearch::new(config, platform, api))
}

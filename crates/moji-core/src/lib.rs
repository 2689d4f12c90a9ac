pub mod config;
pub mod controller;
pub mod error;
pub mod search;
pub mod services;
pub mod theme;

pub use config::Config;
pub use controller::{
    CopyTarget, FeedbackId, RequestToken, SearchController, SearchOutcome, SearchRequest,
    SearchState, Status, StatusKind,
};
pub use error::{MojiError, MojiResult, RequestError, SearchError};
pub use search::{SearchResponse, SearchResult};
pub use services::SearchApi;
pub use theme::{available_themes, get_theme_palette, parse_hex_color, ThemePalette};

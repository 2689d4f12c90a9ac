pub mod format;
pub mod search_api;

pub use search_api::SearchApi;

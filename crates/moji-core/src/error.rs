use thiserror::Error;

/// Errors that can occur in Moji
#[derive(Debug, Error)]
pub enum MojiError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("HTTP client error: {0}")]
    Http(String),
}

/// Result type alias for Moji operations
pub type MojiResult<T> = Result<T, MojiError>;

impl From<std::io::Error> for MojiError {
    fn from(err: std::io::Error) -> Self {
        MojiError::Config(err.to_string())
    }
}

impl From<toml::de::Error> for MojiError {
    fn from(err: toml::de::Error) -> Self {
        MojiError::Config(err.to_string())
    }
}

/// Why a single request to the search endpoint failed.
///
/// `Clone` so the outcome can travel inside UI messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The request never produced a response (connection refused, DNS, timeout)
    #[error("{0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("Error: {status} {reason}{}", detail_suffix(.detail))]
    Status {
        status: u16,
        reason: String,
        detail: Option<String>,
    },

    /// A success response whose body was not the expected JSON
    #[error("Invalid response body: {0}")]
    Decode(String),
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(detail) if !detail.is_empty() => format!(" - {}", detail),
        _ => String::new(),
    }
}

/// Terminal failure of one search attempt
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Please enter a search term.")]
    EmptyQuery,

    #[error(transparent)]
    Request(#[from] RequestError),
}

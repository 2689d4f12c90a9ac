//! Search box state machine.
//!
//! [`SearchController`] owns everything the window shows apart from the query
//! text: the status line, the result tiles and the transient "Copied!"
//! markers. It performs no I/O. The UI asks it to start a search, runs the
//! HTTP request itself, and hands the outcome back together with the
//! [`RequestToken`] it was given. Only the most recently issued token is
//! accepted, so a slow response can never overwrite a newer search.

use std::fmt;

use crate::error::{RequestError, SearchError};
use crate::search::{SearchResponse, SearchResult};

pub const LOADING_MESSAGE: &str = "Searching for emojis...";
pub const NO_RESULTS_MESSAGE: &str = "No relevant emojis found for your query.";
pub const COPY_FAILED_MESSAGE: &str = "Failed to copy emoji";
pub const COPIED_LABEL: &str = "Copied!";

/// Visual kind of the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    Loading,
    Error,
    #[default]
    Clear,
}

/// The single status message shown under the search box
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Status {
    pub message: String,
    pub kind: StatusKind,
}

impl Status {
    pub fn is_visible(&self) -> bool {
        !self.message.is_empty()
    }
}

/// Identifies one issued search request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifies one "Copied!" marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackId(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    Idle,
    Loading(RequestToken),
    Failed,
    NoResults,
    Results {
        token: RequestToken,
        results: Vec<SearchResult>,
    },
}

/// A request the caller should send to the search endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub token: RequestToken,
    /// Trimmed, never empty
    pub query: String,
}

/// What `finish_search` did with a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Tiles are showing; carries the tile count
    Rendered(usize),
    NoResults,
    Failed,
    /// The response belonged to a superseded request and was dropped
    Stale,
}

/// Tile selected for copying, pinned to the result set it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyTarget {
    pub token: RequestToken,
    pub tile: usize,
    pub emoji: String,
}

#[derive(Debug, Clone, Copy)]
struct CopyFeedback {
    id: FeedbackId,
    tile: usize,
}

#[derive(Debug)]
pub struct SearchController {
    state: SearchState,
    status: Status,
    feedback: Vec<CopyFeedback>,
    next_token: u64,
    next_feedback: u64,
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchController {
    /// Starts idle: no tiles, empty status
    pub fn new() -> Self {
        Self {
            state: SearchState::Idle,
            status: Status::default(),
            feedback: Vec::new(),
            next_token: 0,
            next_feedback: 0,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Tiles currently on screen, in response order
    pub fn results(&self) -> &[SearchResult] {
        match &self.state {
            SearchState::Results { results, .. } => results,
            _ => &[],
        }
    }

    pub fn results_visible(&self) -> bool {
        matches!(self.state, SearchState::Results { .. })
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SearchState::Loading(_))
    }

    pub fn show_status(&mut self, message: impl Into<String>, kind: StatusKind) {
        self.status = Status {
            message: message.into(),
            kind,
        };
    }

    /// Hide the grid, drop its tiles and markers, and clear the status.
    ///
    /// Also forgets any in-flight request: its response will be stale.
    pub fn clear_results(&mut self) {
        self.state = SearchState::Idle;
        self.feedback.clear();
        self.show_status("", StatusKind::Clear);
    }

    /// Validate the query and move to the loading state.
    ///
    /// On success the caller must send the returned request and report back
    /// through [`finish_search`](Self::finish_search).
    pub fn begin_search(&mut self, raw_query: &str) -> Result<SearchRequest, SearchError> {
        let query = raw_query.trim();
        self.clear_results();

        if query.is_empty() {
            self.show_status(SearchError::EmptyQuery.to_string(), StatusKind::Error);
            return Err(SearchError::EmptyQuery);
        }

        self.next_token += 1;
        let token = RequestToken(self.next_token);
        self.state = SearchState::Loading(token);
        self.show_status(LOADING_MESSAGE, StatusKind::Loading);
        tracing::debug!(%token, query, "Search started");

        Ok(SearchRequest {
            token,
            query: query.to_string(),
        })
    }

    /// Apply the response (or failure) of the request identified by `token`
    pub fn finish_search(
        &mut self,
        token: RequestToken,
        outcome: Result<SearchResponse, RequestError>,
    ) -> SearchOutcome {
        if self.state != SearchState::Loading(token) {
            tracing::debug!(%token, "Discarding response of superseded search");
            return SearchOutcome::Stale;
        }

        match outcome {
            Ok(response) if !response.results.is_empty() => {
                let count = response.results.len();
                self.show_status("", StatusKind::Clear);
                self.state = SearchState::Results {
                    token,
                    results: response.results,
                };
                SearchOutcome::Rendered(count)
            }
            Ok(_) => {
                self.show_status(NO_RESULTS_MESSAGE, StatusKind::Clear);
                self.state = SearchState::NoResults;
                SearchOutcome::NoResults
            }
            Err(err) => {
                tracing::error!(%token, "Search failed: {}", err);
                self.show_status(format!("Search failed: {}", err), StatusKind::Error);
                self.state = SearchState::Failed;
                SearchOutcome::Failed
            }
        }
    }

    /// The emoji a click on `tile` should copy, if that tile is showing
    pub fn copy_target(&self, tile: usize) -> Option<CopyTarget> {
        match &self.state {
            SearchState::Results { token, results } => results.get(tile).map(|r| CopyTarget {
                token: *token,
                tile,
                emoji: r.emoji.clone(),
            }),
            _ => None,
        }
    }

    /// Attach a "Copied!" marker to the copied tile.
    ///
    /// Returns `None` when the tile's result set has been replaced while the
    /// clipboard write was pending.
    pub fn copy_succeeded(&mut self, target: &CopyTarget) -> Option<FeedbackId> {
        let live = matches!(
            &self.state,
            SearchState::Results { token, results }
                if *token == target.token && target.tile < results.len()
        );
        if !live {
            return None;
        }

        self.next_feedback += 1;
        let id = FeedbackId(self.next_feedback);
        self.feedback.push(CopyFeedback {
            id,
            tile: target.tile,
        });
        Some(id)
    }

    pub fn copy_failed(&mut self, err: &dyn fmt::Display) {
        tracing::error!("Failed to copy: {}", err);
        self.show_status(COPY_FAILED_MESSAGE, StatusKind::Error);
    }

    /// Remove a marker; unknown ids are ignored
    pub fn expire_feedback(&mut self, id: FeedbackId) -> bool {
        let before = self.feedback.len();
        self.feedback.retain(|f| f.id != id);
        self.feedback.len() != before
    }

    /// Number of "Copied!" markers currently on `tile`
    pub fn feedback_count(&self, tile: usize) -> usize {
        self.feedback.iter().filter(|f| f.tile == tile).count()
    }
}

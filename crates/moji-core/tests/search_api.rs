//! `SearchApi` against a fake search service.
//!
//! The fake is a minimal `axum` server on a random port bound to 127.0.0.1.
//! Every test configures the status and raw body it should answer with and
//! can inspect the `q` parameters it received.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use moji_core::config::ServerConfig;
use moji_core::{RequestError, SearchApi, SearchController, SearchOutcome, StatusKind};

struct Reply {
    status: StatusCode,
    body: String,
    queries: Vec<String>,
}

struct FakeSearchService {
    addr: SocketAddr,
    state: Arc<Mutex<Reply>>,
}

impl FakeSearchService {
    async fn start(status: StatusCode, body: &str) -> Self {
        let state = Arc::new(Mutex::new(Reply {
            status,
            body: body.to_string(),
            queries: Vec::new(),
        }));

        let app = Router::new()
            .route("/search", get(search))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    fn api(&self) -> SearchApi {
        SearchApi::new(&ServerConfig {
            base_url: format!("http://{}", self.addr),
            timeout_secs: Some(5),
        })
        .unwrap()
    }

    async fn queries(&self) -> Vec<String> {
        self.state.lock().await.queries.clone()
    }
}

async fn search(
    State(state): State<Arc<Mutex<Reply>>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let mut reply = state.lock().await;
    reply
        .queries
        .push(params.get("q").cloned().unwrap_or_default());
    (
        reply.status,
        [(header::CONTENT_TYPE, "application/json")],
        reply.body.clone(),
    )
        .into_response()
}

#[tokio::test]
async fn test_success_preserves_order() {
    let server = FakeSearchService::start(
        StatusCode::OK,
        r#"{"results":[{"emoji":"🐱","score":0.93},{"emoji":"😺","score":0.88},{"emoji":"🐈","score":0.81}]}"#,
    )
    .await;

    let response = server.api().search("cat").await.unwrap();
    let emojis: Vec<&str> = response.results.iter().map(|r| r.emoji.as_str()).collect();
    assert_eq!(emojis, ["🐱", "😺", "🐈"]);
    assert_eq!(response.results[0].score, 0.93);
}

#[tokio::test]
async fn test_query_is_percent_encoded() {
    let server = FakeSearchService::start(StatusCode::OK, r#"{"results":[]}"#).await;

    server.api().search("thumbs up & ok?").await.unwrap();
    assert_eq!(server.queries().await, ["thumbs up & ok?"]);
}

#[tokio::test]
async fn test_missing_results_field() {
    let server = FakeSearchService::start(StatusCode::OK, "{}").await;

    let response = server.api().search("nothing").await.unwrap();
    assert!(response.results.is_empty());
}

#[tokio::test]
async fn test_null_results_renders_no_results() {
    let server = FakeSearchService::start(StatusCode::OK, r#"{"results":null}"#).await;
    let mut controller = SearchController::new();

    let request = controller.begin_search("nothing").unwrap();
    let outcome = server.api().search(&request.query).await;
    assert!(outcome.as_ref().unwrap().results.is_empty());

    let outcome = controller.finish_search(request.token, outcome);
    assert_eq!(outcome, SearchOutcome::NoResults);
    assert_eq!(controller.status().kind, StatusKind::Clear);
    assert!(!controller.results_visible());
}

#[tokio::test]
async fn test_error_status_with_validation_detail() {
    let server = FakeSearchService::start(
        StatusCode::UNPROCESSABLE_ENTITY,
        r#"{"detail":[{"loc":["query","q"],"msg":"field required"}]}"#,
    )
    .await;

    let err = server.api().search("cat").await.unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"Error: 422 Unprocessable Entity - [{"loc":["query","q"],"msg":"field required"}]"#
    );
}

#[tokio::test]
async fn test_error_status_with_detail() {
    let server =
        FakeSearchService::start(StatusCode::BAD_REQUEST, r#"{"detail":"bad query"}"#).await;

    let err = server.api().search("???").await.unwrap_err();
    assert_eq!(
        err,
        RequestError::Status {
            status: 400,
            reason: "Bad Request".into(),
            detail: Some("bad query".into()),
        }
    );
    assert_eq!(err.to_string(), "Error: 400 Bad Request - bad query");
}

#[tokio::test]
async fn test_error_status_unparsable_body() {
    let server =
        FakeSearchService::start(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>").await;

    let err = server.api().search("cat").await.unwrap_err();
    assert_eq!(
        err,
        RequestError::Status {
            status: 500,
            reason: "Internal Server Error".into(),
            detail: None,
        }
    );
}

#[tokio::test]
async fn test_invalid_success_body() {
    let server = FakeSearchService::start(StatusCode::OK, "not json").await;

    let err = server.api().search("cat").await.unwrap_err();
    assert!(matches!(err, RequestError::Decode(_)));
}

#[tokio::test]
async fn test_connection_refused() {
    // Grab a free port, then close it so nothing is listening
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = SearchApi::new(&ServerConfig {
        base_url: format!("http://{}", addr),
        timeout_secs: Some(5),
    })
    .unwrap();

    let err = api.search("cat").await.unwrap_err();
    assert!(matches!(err, RequestError::Network(_)));
}

#[tokio::test]
async fn test_controller_round_trip() {
    let server =
        FakeSearchService::start(StatusCode::NOT_FOUND, r#"{"detail":"bad query"}"#).await;
    let api = server.api();
    let mut controller = SearchController::new();

    let request = controller.begin_search("  lost  ").unwrap();
    let outcome = api.search(&request.query).await;
    let outcome = controller.finish_search(request.token, outcome);

    assert_eq!(outcome, SearchOutcome::Failed);
    assert_eq!(server.queries().await, ["lost"]);
    let status = controller.status();
    assert_eq!(status.kind, StatusKind::Error);
    assert!(status.message.contains("404"));
    assert!(status.message.contains("bad query"));
}

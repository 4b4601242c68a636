use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use http_body_util::BodyExt;
use tower::ServiceExt;

use venue_server::core::{Config, ServerState};
use venue_server::db::repository::MemoryStadiumRepository;
use venue_server::routes;
use venue_server::services::StaticSchedule;

/// Handles to the services behind a test app, for seeding and asserting
pub struct TestContext {
    pub app: Router,
    pub stadiums: Arc<MemoryStadiumRepository>,
    pub schedule: Arc<StaticSchedule>,
    // Keeps the upload directory alive for the test's duration
    #[allow(dead_code)]
    pub work_dir: tempfile::TempDir,
}

/// Build the full application router with all middleware layers.
///
/// Mirrors the production router construction so tests exercise the same
/// middleware stack (CORS, compression, tracing, request IDs).
pub fn build_test_app() -> TestContext {
    build_test_app_with(|_| {})
}

/// Same as [`build_test_app`] with a config adjustment applied first
pub fn build_test_app_with(adjust: impl FnOnce(&mut Config)) -> TestContext {
    let work_dir = tempfile::tempdir().expect("tempdir");
    let mut config = Config {
        work_dir: work_dir.path().to_string_lossy().into_owned(),
        ..Config::default()
    };
    adjust(&mut config);

    let stadiums = Arc::new(MemoryStadiumRepository::new());
    let schedule = Arc::new(StaticSchedule::new());
    let state = ServerState::with_parts(config, stadiums.clone(), schedule.clone());

    TestContext {
        app: routes::build_app().with_state(state),
        stadiums,
        schedule,
        work_dir,
    }
}

/// Send a GET request
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a request with a JSON body
pub async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a multipart/form-data request with a single named file field
pub async fn send_file(
    app: Router,
    uri: &str,
    field_name: &str,
    filename: &str,
    bytes: &[u8],
) -> Response<Body> {
    let boundary = "venue-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field_name}\"; filename=\"{filename}\"\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(
                "content-type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body as JSON
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

use axum::{routing::get, Router};

/// Body served on the root route.
pub const GREETING: &str = "Hello World from CI/CD!";

// Root endpoint
pub async fn root() -> &'static str {
    GREETING
}

/// Build the application router. The route table is fixed for the process
/// lifetime; unmatched paths and methods get axum's default responses.
pub fn router() -> Router {
    Router::new().route("/", get(root))
}

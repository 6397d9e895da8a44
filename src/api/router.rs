//! Router assembly.
//!
//! Returns a plain `Router` so tests can drive it with `oneshot` and the
//! binary can mount it on a listener.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::api::describe;
use crate::api::endpoints;
use crate::api::types::ApiContext;
use crate::config::ServiceConfig;

/// Uploaded CSV datasets run to a few MB; leave headroom for multipart
/// overhead.
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

pub fn api_router(config: ServiceConfig) -> Router {
    let ctx = ApiContext::new(config);

    Router::new()
        .route("/", get(endpoints::greeting))
        .route("/text", get(endpoints::sample_text))
        .route("/text_clean", get(endpoints::sample_text_clean))
        .route("/text-processing", post(endpoints::process_text))
        .route("/text-processing-file", post(endpoints::process_file))
        .route("/docs.json", get(describe::docs))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(ctx)
}

//! Root path and fallback handlers.

use axum::{
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Json},
};
use shared::{FailResponse, MessageResponse};
use tracing::{info, warn};

pub const WELCOME_MESSAGE: &str =
    "Welcome to the Bookshelf API! Access '/books' path to do CRUD bookshelf operation.";

/// GET /
pub async fn welcome() -> impl IntoResponse {
    info!("GET /");
    (
        StatusCode::OK,
        Json(MessageResponse {
            message: WELCOME_MESSAGE.to_string(),
        }),
    )
}

/// Any other method on /
pub async fn method_not_allowed(method: Method) -> impl IntoResponse {
    let method = method.as_str().to_lowercase();
    warn!("{} / rejected", method);
    (
        StatusCode::BAD_REQUEST,
        Json(MessageResponse {
            message: format!("Cannot access this path using {} method", method),
        }),
    )
}

/// Unmatched paths
pub async fn not_found(method: Method, uri: Uri) -> impl IntoResponse {
    warn!("No route for {} {}", method, uri);
    (StatusCode::NOT_FOUND, Json(FailResponse::new("Not Found")))
}

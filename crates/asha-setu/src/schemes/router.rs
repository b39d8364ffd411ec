use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};

use super::intake::ProfileSubmission;
use super::service::SchemeMatchingService;
use crate::error::AppError;

/// Router exposing the match endpoint.
pub fn scheme_router(service: Arc<SchemeMatchingService>) -> Router {
    Router::new()
        .route("/api/schemes", post(match_handler))
        .with_state(service)
}

pub(crate) async fn match_handler(
    State(service): State<Arc<SchemeMatchingService>>,
    axum::Json(submission): axum::Json<ProfileSubmission>,
) -> Response {
    match service.match_submission(submission) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => AppError::from(error).into_response(),
    }
}

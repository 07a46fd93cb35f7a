use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;

use crate::error::DirectoryError;

impl IntoResponse for DirectoryError {
    fn into_response(self) -> Response {
        let status = self.status();
        let activity = self.activity();
        warn!(%status, %activity, error = %self, "activity_request_rejected");
        detail(status, self.to_string())
    }
}

/// Body for a rejected request that never reached the directory.
pub fn detail(status: StatusCode, detail: impl Into<String>) -> Response {
    (status, Json(serde_json::json!({ "detail": detail.into() }))).into_response()
}

/**
 * Error Conversion
 *
 * `BackendError` implements `IntoResponse` so handlers can return it
 * directly.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "success": false,
 *   "message": "Invalid email or password",
 *   "status": 401
 * }
 * ```
 */

use axum::{
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "request failed");
        }

        let body = serde_json::json!({
            "success": false,
            "message": self.message(),
            "status": status.as_u16(),
        });

        (status, [(CONTENT_TYPE, "application/json")], body.to_string()).into_response()
    }
}

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

/// Opaque request-level failure. Storage errors (constraint violations,
/// pool exhaustion, dropped connections) all land here via `?`; the full
/// chain is logged server-side and the client sees a bare 500.
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("request failed: {:#}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_core::error::FolioError;

// ---------------------------------------------------------------------------
// AppError: unified error type for JSON responses
// ---------------------------------------------------------------------------

/// Unified error type for the JSON API. HTML pages never return it; they
/// turn failures into view state instead.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self.0.downcast_ref::<FolioError>() {
            Some(e) => match e {
                FolioError::ProjectNotFound(_) => StatusCode::NOT_FOUND,
                FolioError::InvalidSlug(_) | FolioError::InvalidImageSlot(_) => {
                    StatusCode::BAD_REQUEST
                }
                FolioError::ContentTransport(_) | FolioError::ContentQuery { .. } => {
                    StatusCode::BAD_GATEWAY
                }
                FolioError::NotInitialized
                | FolioError::InvalidAssetRef(_)
                | FolioError::InvalidConfig(_)
                | FolioError::Io(_)
                | FolioError::Yaml(_)
                | FolioError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            None => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!("request failed: {:#}", self.0);
        }
        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, axum::Json(body)).into_response()
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

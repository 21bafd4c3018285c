//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use showcase_domain::error::ShowcaseError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
pub(crate) struct ErrorBody {
    pub(crate) error: String,
}

/// Status code and client-facing message for a [`ShowcaseError`].
///
/// Source errors are logged and hidden behind a generic message.
pub(crate) fn status_and_message(err: &ShowcaseError) -> (StatusCode, String) {
    match err {
        ShowcaseError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
        ShowcaseError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
        ShowcaseError::Source(err) => {
            tracing::error!(error = %err, "catalog source error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            )
        }
    }
}

/// Maps [`ShowcaseError`] to an HTTP response with appropriate status code.
pub struct ApiError(ShowcaseError);

impl From<ShowcaseError> for ApiError {
    fn from(err: ShowcaseError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = status_and_message(&self.0);
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showcase_domain::error::{NotFoundError, ValidationError};

    #[test]
    fn should_map_validation_to_bad_request() {
        let err = ShowcaseError::from(ValidationError::InvalidId("x".to_string()));
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_not_found_to_404() {
        let err = ShowcaseError::from(NotFoundError {
            entity: "Automation",
            id: "x".to_string(),
        });
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_hide_source_errors_behind_500() {
        let io = std::io::Error::other("disk on fire");
        let (status, message) = status_and_message(&ShowcaseError::Source(Box::new(io)));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "internal server error");
    }
}

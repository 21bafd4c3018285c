//! Server-side rendered HTML pages (no JavaScript).

#[allow(clippy::missing_errors_doc)]
pub mod automations;
pub mod gallery;
pub mod home;

use askama::Template;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;

use showcase_app::ports::CatalogSource;
use showcase_domain::error::ShowcaseError;

use crate::error::status_and_message;
use crate::state::AppState;

/// Build the sub-router for SSR HTML pages.
pub fn routes<CS>() -> Router<AppState<CS>>
where
    CS: CatalogSource + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(home::index::<CS>))
        .route("/automations", get(gallery::index::<CS>))
        .route("/automations/{id}", get(automations::detail::<CS>))
}

/// Error page template.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    status: u16,
    message: String,
}

/// Maps [`ShowcaseError`] to an HTML error page with the matching status.
pub struct DashboardError(ShowcaseError);

impl From<ShowcaseError> for DashboardError {
    fn from(err: ShowcaseError) -> Self {
        Self(err)
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let (status, message) = status_and_message(&self.0);
        let page = ErrorTemplate {
            status: status.as_u16(),
            message,
        };
        let mut response = render(&page);
        *response.status_mut() = status;
        response
    }
}

/// Render `template`, falling back to a bare 500 when rendering fails.
pub(crate) fn render<T: Template>(template: &T) -> Response {
    match template.render() {
        Ok(body) => Html(body).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to render template");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

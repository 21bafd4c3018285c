//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod automations;
pub mod facets;

use axum::Router;
use axum::routing::get;

use showcase_app::ports::CatalogSource;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<CS>() -> Router<AppState<CS>>
where
    CS: CatalogSource + Send + Sync + 'static,
{
    Router::new()
        .route("/automations", get(automations::list::<CS>))
        .route("/automations/{id}", get(automations::get::<CS>))
        .route("/facets", get(facets::list))
}

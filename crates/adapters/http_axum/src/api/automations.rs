//! JSON REST handlers for the automation gallery.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use showcase_app::ports::CatalogSource;
use showcase_app::services::gallery_service::GalleryView;
use showcase_domain::automation::AutomationItem;
use showcase_domain::error::ShowcaseError;
use showcase_domain::filter::FilterCriteria;
use showcase_domain::id::AutomationId;

use crate::error::{ApiError, ErrorBody};
use crate::query::GalleryQuery;
use crate::state::AppState;

/// Body of a successful list response.
#[derive(Serialize)]
pub struct GalleryBody {
    /// Size of the whole catalog.
    pub total: usize,
    /// Number of matching items.
    pub count: usize,
    pub items: Vec<AutomationItem>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<GalleryBody>),
    /// The catalog is still loading; retry after that many seconds.
    Loading(u32),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
            Self::Loading(retry_after) => (
                StatusCode::SERVICE_UNAVAILABLE,
                [(header::RETRY_AFTER, retry_after.to_string())],
                Json(ErrorBody {
                    error: "automation catalog is loading".to_string(),
                }),
            )
                .into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<AutomationItem>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/automations?q=&categories=&benefit=`
pub async fn list<CS>(
    State(state): State<AppState<CS>>,
    Query(query): Query<GalleryQuery>,
) -> ListResponse
where
    CS: CatalogSource + Send + Sync + 'static,
{
    let criteria = FilterCriteria::from(query);
    match state.gallery_service.browse(&criteria) {
        GalleryView::Loading => ListResponse::Loading(state.loading_refresh_seconds),
        GalleryView::Ready(page) => ListResponse::Ok(Json(GalleryBody {
            total: page.total,
            count: page.items.len(),
            items: page.items,
        })),
    }
}

/// `GET /api/automations/:id`
pub async fn get<CS>(
    State(state): State<AppState<CS>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    CS: CatalogSource + Send + Sync + 'static,
{
    let automation_id = AutomationId::from_str(&id).map_err(ShowcaseError::from)?;
    let item = state.gallery_service.get_automation(automation_id)?;
    Ok(GetResponse::Ok(Json(item)))
}

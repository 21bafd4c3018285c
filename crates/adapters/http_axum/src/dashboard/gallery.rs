//! Automation gallery page: search, category and benefit filters.

use askama::Template;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};

use showcase_app::ports::CatalogSource;
use showcase_app::services::gallery_service::GalleryView;
use showcase_domain::filter::FilterCriteria;

use super::render;
use crate::query::GalleryQuery;
use crate::state::AppState;
use crate::view::{Card, FilterControl, active_chips, benefit_buttons, category_buttons};

/// Gallery page template.
#[derive(Template)]
#[template(path = "gallery.html")]
pub struct GalleryTemplate {
    loading: bool,
    refresh_seconds: u32,
    /// Current filters, carried by the search form.
    current: GalleryQuery,
    filters_active: bool,
    category_buttons: Vec<FilterControl>,
    benefit_buttons: Vec<FilterControl>,
    chips: Vec<FilterControl>,
    cards: Vec<Card>,
    total: usize,
}

impl IntoResponse for GalleryTemplate {
    fn into_response(self) -> Response {
        render(&self)
    }
}

/// `GET /automations?q=&categories=&benefit=`: filtered gallery.
pub async fn index<CS>(
    State(state): State<AppState<CS>>,
    Query(query): Query<GalleryQuery>,
) -> GalleryTemplate
where
    CS: CatalogSource + Send + Sync + 'static,
{
    let criteria = FilterCriteria::from(query);

    let (loading, cards, total) = match state.gallery_service.browse(&criteria) {
        GalleryView::Loading => (true, Vec::new(), 0),
        GalleryView::Ready(page) => (
            false,
            page.items.iter().map(Card::from).collect(),
            page.total,
        ),
    };

    GalleryTemplate {
        loading,
        refresh_seconds: state.loading_refresh_seconds,
        current: GalleryQuery::from(&criteria),
        filters_active: criteria.is_active(),
        category_buttons: category_buttons(&criteria),
        benefit_buttons: benefit_buttons(&criteria),
        chips: active_chips(&criteria),
        cards,
        total,
    }
}

//! Home page: hero, call to action and a few featured automations.

use askama::Template;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use showcase_app::ports::CatalogSource;

use super::render;
use crate::state::AppState;
use crate::view::Card;

/// Number of automations featured on the home page.
const FEATURED: usize = 3;

/// Home page template.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    loaded: bool,
    total: usize,
    featured: Vec<Card>,
}

impl IntoResponse for HomeTemplate {
    fn into_response(self) -> Response {
        render(&self)
    }
}

/// `GET /`: landing page.
pub async fn index<CS>(State(state): State<AppState<CS>>) -> HomeTemplate
where
    CS: CatalogSource + Send + Sync + 'static,
{
    match state.gallery_service.catalog() {
        Some(catalog) => HomeTemplate {
            loaded: true,
            total: catalog.len(),
            featured: catalog.iter().take(FEATURED).map(Card::from).collect(),
        },
        None => HomeTemplate {
            loaded: false,
            total: 0,
            featured: Vec::new(),
        },
    }
}

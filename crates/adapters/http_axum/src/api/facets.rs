//! JSON handler listing the filter options of the gallery.

use axum::Json;
use serde::Serialize;

use showcase_domain::automation::{KNOWN_BENEFITS, KnownCategory};

/// A category filter option.
#[derive(Serialize)]
pub struct CategoryFacet {
    /// Tag value selecting the category.
    pub key: &'static str,
    /// Value to pass in the `categories` filter parameter.
    pub label: &'static str,
}

/// Body of the facets response.
#[derive(Serialize)]
pub struct FacetsBody {
    pub categories: Vec<CategoryFacet>,
    pub benefits: Vec<&'static str>,
}

/// `GET /api/facets`
pub async fn list() -> Json<FacetsBody> {
    let categories = KnownCategory::ALL
        .into_iter()
        .map(|category| CategoryFacet {
            key: category.key(),
            label: category.label(),
        })
        .collect();

    Json(FacetsBody {
        categories,
        benefits: KNOWN_BENEFITS.to_vec(),
    })
}

//! Filter criteria as URL query parameters.
//!
//! `?q=<text>&categories=<label>,<label>&benefit=<benefit>`
//!
//! Category labels never contain commas (tags are comma-split when the
//! catalog is loaded), so a single comma-joined parameter round-trips.

use serde::{Deserialize, Serialize};

use showcase_domain::filter::FilterCriteria;

/// Query-string form of [`FilterCriteria`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryQuery {
    pub q: String,
    pub categories: String,
    pub benefit: String,
}

impl From<GalleryQuery> for FilterCriteria {
    fn from(query: GalleryQuery) -> Self {
        query
            .categories
            .split(',')
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .fold(FilterCriteria::new().with_query(query.q), |criteria, label| {
                criteria.with_category(label)
            })
            .with_benefit(query.benefit.trim())
    }
}

impl From<&FilterCriteria> for GalleryQuery {
    fn from(criteria: &FilterCriteria) -> Self {
        Self {
            q: criteria.query().to_string(),
            categories: criteria.categories().join(","),
            benefit: criteria.benefit().to_string(),
        }
    }
}

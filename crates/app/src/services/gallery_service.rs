//! Gallery service: loads the automation catalog once and serves filtered views.

use std::sync::Arc;

use tokio::sync::OnceCell;

use showcase_domain::automation::{AutomationItem, normalize};
use showcase_domain::error::{NotFoundError, ShowcaseError};
use showcase_domain::filter::FilterCriteria;
use showcase_domain::id::AutomationId;

use crate::ports::CatalogSource;

/// Result of browsing the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryView {
    /// The catalog has not finished loading yet.
    Loading,
    /// The catalog is available.
    Ready(GalleryPage),
}

/// Visible subset of the catalog for one set of criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryPage {
    /// Size of the whole catalog.
    pub total: usize,
    /// Matching items, in catalog order.
    pub items: Vec<AutomationItem>,
}

/// Application service owning the in-memory automation catalog.
///
/// The catalog is read from the [`CatalogSource`] at most once; every caller
/// of [`load`](Self::load), concurrent or not, observes the same collection.
/// A failed read is logged and leaves the catalog empty for the lifetime of
/// the service.
pub struct GalleryService<S> {
    source: S,
    catalog: OnceCell<Arc<[AutomationItem]>>,
}

impl<S: CatalogSource> GalleryService<S> {
    /// Create a new service backed by the given catalog source.
    pub fn new(source: S) -> Self {
        Self {
            source,
            catalog: OnceCell::new(),
        }
    }

    /// Load the catalog, reading the source on the first call only.
    #[tracing::instrument(skip(self))]
    pub async fn load(&self) -> Arc<[AutomationItem]> {
        Arc::clone(self.catalog.get_or_init(|| self.read_source()).await)
    }

    async fn read_source(&self) -> Arc<[AutomationItem]> {
        match self.source.fetch().await {
            Ok(records) => {
                let items = normalize(records);
                tracing::info!(count = items.len(), "automation catalog loaded");
                items.into()
            }
            Err(err) => {
                tracing::error!(
                    error = %err,
                    cause = ?std::error::Error::source(&err),
                    "failed to load automation catalog"
                );
                Arc::from(Vec::new())
            }
        }
    }

    /// The loaded catalog, or `None` while loading is still pending.
    #[must_use]
    pub fn catalog(&self) -> Option<Arc<[AutomationItem]>> {
        self.catalog.get().map(Arc::clone)
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.catalog.initialized()
    }

    /// Compute the visible subset of the catalog for `criteria`.
    #[must_use]
    pub fn browse(&self, criteria: &FilterCriteria) -> GalleryView {
        let Some(catalog) = self.catalog.get() else {
            return GalleryView::Loading;
        };
        let items = criteria.apply(catalog).into_iter().cloned().collect();
        GalleryView::Ready(GalleryPage {
            total: catalog.len(),
            items,
        })
    }

    /// Look up an automation by id.
    ///
    /// # Errors
    ///
    /// Returns [`ShowcaseError::NotFound`] when no loaded automation has `id`
    /// (including while the catalog is still loading).
    pub fn get_automation(&self, id: AutomationId) -> Result<AutomationItem, ShowcaseError> {
        self.catalog
            .get()
            .and_then(|catalog| catalog.iter().find(|item| item.id == id).cloned())
            .ok_or_else(|| {
                NotFoundError {
                    entity: "Automation",
                    id: id.to_string(),
                }
                .into()
            })
    }
}

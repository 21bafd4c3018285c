//! Shared application state for axum handlers.

use std::sync::Arc;

use showcase_app::ports::CatalogSource;
use showcase_app::services::gallery_service::GalleryService;

/// Seconds between reloads of a page rendered while the catalog is loading.
pub const DEFAULT_LOADING_REFRESH_SECONDS: u32 = 1;

/// Application state shared across all axum handlers.
///
/// Generic over the catalog source. `Clone` only clones the `Arc`, so the
/// source itself does not need to be `Clone`.
pub struct AppState<CS> {
    /// Gallery use cases over the loaded catalog.
    pub gallery_service: Arc<GalleryService<CS>>,
    /// Auto-refresh interval of the loading placeholder.
    pub loading_refresh_seconds: u32,
}

impl<CS> Clone for AppState<CS> {
    fn clone(&self) -> Self {
        Self {
            gallery_service: Arc::clone(&self.gallery_service),
            loading_refresh_seconds: self.loading_refresh_seconds,
        }
    }
}

impl<CS> AppState<CS>
where
    CS: CatalogSource + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(gallery_service: GalleryService<CS>) -> Self {
        Self::from_arc(Arc::new(gallery_service))
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    ///
    /// Use this when the service is shared with the background loading task
    /// before constructing the HTTP state.
    pub fn from_arc(gallery_service: Arc<GalleryService<CS>>) -> Self {
        Self {
            gallery_service,
            loading_refresh_seconds: DEFAULT_LOADING_REFRESH_SECONDS,
        }
    }

    /// Override the auto-refresh interval of the loading placeholder.
    #[must_use]
    pub fn with_loading_refresh_seconds(mut self, seconds: u32) -> Self {
        self.loading_refresh_seconds = seconds;
        self
    }
}

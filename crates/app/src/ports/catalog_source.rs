//! Catalog source port: where the raw automation dataset comes from.

use std::future::Future;

use showcase_domain::automation::RawRecord;
use showcase_domain::error::ShowcaseError;

/// Read access to the published automation dataset.
pub trait CatalogSource {
    /// Read every raw record, in dataset order.
    ///
    /// Called once per process by [`GalleryService`](crate::services::gallery_service::GalleryService).
    fn fetch(&self) -> impl Future<Output = Result<Vec<RawRecord>, ShowcaseError>> + Send;
}

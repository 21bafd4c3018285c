//! Catalog-specific error type wrapping IO and JSON errors.

use std::path::PathBuf;

use showcase_domain::error::ShowcaseError;

/// Errors originating from reading the catalog file.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The dataset file could not be read.
    #[error("failed to read catalog file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset is not a JSON array of records.
    #[error("failed to parse catalog JSON")]
    Parse(#[from] serde_json::Error),
}

impl From<CatalogError> for ShowcaseError {
    fn from(err: CatalogError) -> Self {
        Self::Source(Box::new(err))
    }
}

//! File-backed implementation of [`CatalogSource`].

use std::future::Future;
use std::path::{Path, PathBuf};

use showcase_app::ports::CatalogSource;
use showcase_domain::automation::RawRecord;
use showcase_domain::error::ShowcaseError;

use crate::error::CatalogError;

/// Decode a dataset: a JSON array of raw records.
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] when the bytes are not a JSON array or a
/// field holds something other than a string or `null`.
pub fn parse_records(bytes: &[u8]) -> Result<Vec<RawRecord>, CatalogError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Reads the automation dataset from a JSON file.
#[derive(Debug, Clone)]
pub struct FsCatalogSource {
    path: PathBuf,
}

impl FsCatalogSource {
    /// Create a source reading from `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FsCatalogSource {
    fn fetch(&self) -> impl Future<Output = Result<Vec<RawRecord>, ShowcaseError>> + Send {
        let path = self.path.clone();
        async move {
            tracing::debug!(path = %path.display(), "reading automation catalog");
            let bytes = tokio::fs::read(&path)
                .await
                .map_err(|source| CatalogError::Read { path, source })?;
            Ok(parse_records(&bytes)?)
        }
    }
}

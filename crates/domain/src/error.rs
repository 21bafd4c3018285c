//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`ShowcaseError`] via `From` at the port boundary.

/// Top-level error returned by domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum ShowcaseError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The catalog data source failed (IO, decoding, …).
    #[error("catalog source error")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Input that violates a domain rule.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid automation id: {0}")]
    InvalidId(String),
}

/// A lookup by identifier matched nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

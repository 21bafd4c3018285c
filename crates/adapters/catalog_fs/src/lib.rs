//! # showcase-adapter-catalog-fs
//!
//! Catalog source backed by a JSON file on disk.
//!
//! ## Responsibilities
//! - Implement the [`CatalogSource`](showcase_app::ports::CatalogSource) port
//!   defined in `showcase-app`
//! - Read the published dataset (a JSON array of raw records) in one go
//! - Map IO and decoding failures into typed errors
//!
//! ## Dependency rule
//! Depends on `showcase-app` (for the port trait) and `showcase-domain` (for
//! the raw record type). The `app` and `domain` crates must never reference
//! this adapter.

mod error;
mod source;

pub use error::CatalogError;
pub use source::{FsCatalogSource, parse_records};

//! # showcase-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `CatalogSource`: one-shot read of the raw automation dataset
//! - Define **driving/inbound** use cases:
//!   - `GalleryService`: load the catalog exactly once, browse it with
//!     filter criteria, look up single automations
//! - Orchestrate domain objects without knowing *where* the catalog lives
//!
//! ## Dependency rule
//! Depends on `showcase-domain` only (plus `tokio::sync` for the load-once cell).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;

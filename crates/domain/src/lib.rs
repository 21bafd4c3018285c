//! # showcase-domain
//!
//! Pure domain model for the automation gallery.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Automation items** (catalog entries describing pre-built
//!   business-process automation templates)
//! - Normalize loosely-typed **raw records** into items
//! - Derive a single **category** per item from its tags
//! - Define **filter criteria** and the filter engine computing the visible
//!   subset of the catalog
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod automation;
pub mod filter;

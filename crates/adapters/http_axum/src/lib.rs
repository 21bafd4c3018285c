//! # showcase-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **site pages** rendered server-side: home, the automation
//!   gallery and automation details
//! - Serve a **JSON API** over the same gallery (`/api/automations`,
//!   `/api/facets`)
//! - Serve the **public directory** (stylesheet, raw dataset) for every other
//!   path
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses (JSON or HTML)
//!
//! ## No-JS gallery
//! - Every page is rendered server-side as complete HTML.
//! - Filter controls (search, category toggles, benefit toggles, chip
//!   removal, reset) are `GET` forms carrying the *next* filter state, so the
//!   current filters always live in the URL.
//! - While the catalog is still loading the gallery renders a placeholder
//!   with `<meta http-equiv="refresh">`.
//!
//! ## Dependency rule
//! Depends on `showcase-app` (for port traits and services) and
//! `showcase-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod query;
pub mod router;
pub mod state;
pub mod view;

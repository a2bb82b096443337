//! Federated search service for field-service-management portals.
//!
//! The portal's global search spans an external ERP customer directory and
//! three document collections (workers, jobs with nested follow-ups, and
//! top-level follow-ups). This crate hosts that aggregation behind a small
//! HTTP API:
//!
//! - [`search`] — the aggregation core: matching, highlighting, dedup,
//!   type-priority ordering, quick/full scopes, typed degradation
//! - [`sources`] — the seams to the ERP directory and the document store
//! - [`models`] — the heterogeneous records consumed by the aggregator
//! - [`api`] — axum routes exposing `/v1/search`

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod search;
pub mod sources;

pub use error::{AppError, Result};

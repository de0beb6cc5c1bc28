//! HTTP/REST API layer for Roster.
//!
//! Axum-based read-only API at `/api/` serving character view models and
//! generated avatars, with CORS, compression, and request tracing.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod response;
pub mod router;

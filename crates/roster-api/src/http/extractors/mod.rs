//! Request extractors for API handlers.

pub mod query;

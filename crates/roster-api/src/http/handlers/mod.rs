//! HTTP request handlers for the REST API.

pub mod avatar;
pub mod character;

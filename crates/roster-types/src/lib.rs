//! Shared domain types for Roster.
//!
//! This crate contains the core domain types used across the Roster service:
//! raw character records as stored in the dataset, the derived view model
//! served by the API, configuration, and the associated error types.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, thiserror.

pub mod character;
pub mod config;
pub mod error;

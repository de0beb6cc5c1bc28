//! Infrastructure layer for Roster.
//!
//! Contains the implementation of the repository trait defined in
//! `roster-core` (a JSON dataset held in memory), the `config.toml` loader,
//! and data directory resolution.

pub mod config;
pub mod dataset;
pub mod filesystem;

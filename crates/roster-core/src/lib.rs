//! Business logic and repository trait definitions for Roster.
//!
//! This crate turns raw character records into the view model served by the
//! API and defines the repository "port" the infrastructure layer implements.
//! It depends only on `roster-types` -- never on `roster-infra` or any IO crate.

pub mod character;
pub mod repository;
pub mod service;

//! Character view-model derivation.
//!
//! Every piece here is a pure function of the raw record, except quote
//! sampling which takes the random source as an argument.

pub mod avatar;
pub mod builder;
pub mod quotes;
pub mod skills;
pub mod slug;

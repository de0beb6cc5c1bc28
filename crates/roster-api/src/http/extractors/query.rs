//! Query parameter extractors.

use serde::Deserialize;

/// Query parameters for the placeholder avatar endpoint.
#[derive(Debug, Deserialize, Default)]
pub struct AvatarQuery {
    /// Accent color as 6 hex digits; invalid or missing values use the default.
    pub color: Option<String>,
}

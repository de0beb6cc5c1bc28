//! Placeholder avatar endpoint.
//!
//! GET /api/character-avatar/{slug}?color={hex} - always succeeds, for known
//! and unknown slugs alike.

use axum::extract::{Path, Query};

use roster_core::character::avatar::render_avatar_svg;

use crate::http::extractors::query::AvatarQuery;
use crate::http::response::SvgImage;

/// GET /api/character-avatar/{slug} - Render the placeholder SVG.
pub async fn get_avatar(Path(slug): Path<String>, Query(query): Query<AvatarQuery>) -> SvgImage {
    tracing::trace!(%slug, color = ?query.color, "Rendering avatar");
    SvgImage(render_avatar_svg(&slug, query.color.as_deref()))
}

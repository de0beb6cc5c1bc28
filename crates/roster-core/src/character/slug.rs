//! Full-name and slug derivation.

use std::collections::HashMap;

use roster_types::character::{RawCharacter, RawName};

/// Build the display name `"first last"`, trimmed.
///
/// The middle name never takes part; a missing last name yields just the first.
pub fn full_name(name: &RawName) -> String {
    format!("{} {}", name.first.trim(), name.last.trim())
        .trim()
        .to_string()
}

/// Generate the lookup slug from a full name.
///
/// Rules:
/// - Lowercase
/// - Runs of whitespace become a single hyphen
/// - Leading/trailing whitespace is dropped
///
/// # Examples
///
/// ```
/// use roster_core::character::slug::slugify;
///
/// assert_eq!(slugify("Philip Fry"), "philip-fry");
/// assert_eq!(slugify("  Turanga   Leela "), "turanga-leela");
/// ```
pub fn slugify(full_name: &str) -> String {
    full_name
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Slug of a character, derived from its first and last name.
pub fn character_slug(name: &RawName) -> String {
    slugify(&full_name(name))
}

/// Normalize a slug received from a caller before comparing it.
pub fn normalize_slug(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Two or more records that produce the same slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugCollision {
    pub slug: String,
    /// Record ids in collection order; lookups resolve to the first.
    pub ids: Vec<i64>,
}

/// Find every slug shared by more than one record, in order of first appearance.
pub fn find_slug_collisions(records: &[RawCharacter]) -> Vec<SlugCollision> {
    let mut order: Vec<String> = Vec::new();
    let mut by_slug: HashMap<String, Vec<i64>> = HashMap::new();

    for record in records {
        let slug = character_slug(&record.name);
        let ids = by_slug.entry(slug.clone()).or_default();
        if ids.is_empty() {
            order.push(slug);
        }
        ids.push(record.id);
    }

    order
        .into_iter()
        .filter_map(|slug| {
            let ids = by_slug.remove(&slug)?;
            (ids.len() > 1).then_some(SlugCollision { slug, ids })
        })
        .collect()
}

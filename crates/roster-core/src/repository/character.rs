//! Character repository trait definition.

use roster_types::character::RawCharacter;

use crate::character::slug::{character_slug, normalize_slug};

/// Read-only access to the raw character collection.
///
/// Implementations live in roster-infra (e.g., JsonCharacterRepository). The
/// collection is loaded once and never changes, so every method is
/// synchronous and borrows from the repository.
pub trait CharacterRepository: Send + Sync {
    /// All records in collection order.
    fn all(&self) -> &[RawCharacter];

    /// First record whose derived slug equals `slug` (after normalization).
    fn find_by_slug(&self, slug: &str) -> Option<&RawCharacter> {
        let wanted = normalize_slug(slug);
        self.all()
            .iter()
            .find(|record| character_slug(&record.name) == wanted)
    }

    /// Number of records.
    fn len(&self) -> usize {
        self.all().len()
    }

    fn is_empty(&self) -> bool {
        self.all().is_empty()
    }
}

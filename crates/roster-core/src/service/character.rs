//! Character lookup service.
//!
//! Resolves slugs and full listings into view models. Quote sampling uses the
//! thread-local RNG unless a caller supplies its own through the `_with`
//! variants.

use rand::Rng;

use roster_types::character::CharacterViewModel;
use roster_types::error::CharacterError;

use crate::character::builder::build_view_model;
use crate::character::slug::{SlugCollision, find_slug_collisions};
use crate::repository::character::CharacterRepository;

/// Service answering character queries over an immutable collection.
///
/// Generic over the repository trait to maintain clean architecture --
/// roster-core never depends on roster-infra.
pub struct CharacterService<R: CharacterRepository> {
    repo: R,
}

impl<R: CharacterRepository> CharacterService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Access the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Number of characters in the collection.
    pub fn count(&self) -> usize {
        self.repo.len()
    }

    /// Resolve a single character by slug.
    pub fn resolve_by_slug(&self, slug: &str) -> Result<CharacterViewModel, CharacterError> {
        self.resolve_by_slug_with(slug, &mut rand::rng())
    }

    /// Resolve a single character by slug, sampling quotes from `rng`.
    ///
    /// Colliding slugs resolve to the first record in collection order.
    pub fn resolve_by_slug_with<G: Rng + ?Sized>(
        &self,
        slug: &str,
        rng: &mut G,
    ) -> Result<CharacterViewModel, CharacterError> {
        let record = self.repo.find_by_slug(slug).ok_or_else(|| {
            tracing::debug!(slug, "No character matches slug");
            CharacterError::NotFound(slug.to_string())
        })?;

        Ok(build_view_model(record, rng))
    }

    /// Resolve every character, preserving collection order.
    pub fn resolve_all(&self) -> Vec<CharacterViewModel> {
        self.resolve_all_with(&mut rand::rng())
    }

    /// Resolve every character, sampling quotes from `rng`.
    pub fn resolve_all_with<G: Rng + ?Sized>(&self, rng: &mut G) -> Vec<CharacterViewModel> {
        self.repo
            .all()
            .iter()
            .map(|record| build_view_model(record, &mut *rng))
            .collect()
    }

    /// Slugs shared by more than one record.
    pub fn slug_collisions(&self) -> Vec<SlugCollision> {
        find_slug_collisions(self.repo.all())
    }
}

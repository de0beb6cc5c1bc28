//! Per-record transform from [`RawCharacter`] to [`CharacterViewModel`].

use rand::Rng;

use roster_types::character::{CharacterViewModel, DisplayName, ImageSet, RawCharacter};

use super::avatar::resolve_images;
use super::quotes::sample_quotes;
use super::skills::skills_for;
use super::slug::{full_name, slugify};

/// Substitute for absent free-text fields.
pub const UNKNOWN: &str = "unknown";

/// Build the view model for one raw record.
///
/// The raw record is only read. Everything except the quote sample is a
/// pure function of the record; the sample draws from `rng`.
pub fn build_view_model<R: Rng + ?Sized>(raw: &RawCharacter, rng: &mut R) -> CharacterViewModel {
    let full = full_name(&raw.name);
    let slug = slugify(&full);
    let resolved = resolve_images(&raw.images, &slug, raw.id);

    CharacterViewModel {
        id: raw.id,
        name: DisplayName {
            first: raw.name.first.clone(),
            middle: raw.name.middle.clone().unwrap_or_default(),
            last: raw.name.last.clone(),
            full: full.clone(),
        },
        description: format!("{full} is a character from Futurama."),
        gender: or_unknown(raw.gender.as_deref()),
        species: or_unknown(raw.species.as_deref()),
        home_planet: or_unknown(raw.home_planet.as_deref()),
        occupation: or_unknown(raw.occupation.as_deref()),
        age: or_unknown(raw.age.as_deref()),
        avatar: resolved.avatar,
        images: ImageSet {
            main: raw.images.main().unwrap_or_default().to_string(),
            head_shot: raw.images.head_shot().unwrap_or_default().to_string(),
            additional: resolved.additional,
        },
        sayings: raw.sayings.clone(),
        skills: skills_for(&full),
        quotes: sample_quotes(&raw.sayings, &full, rng),
        slug,
    }
}

fn or_unknown(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => UNKNOWN.to_string(),
    }
}

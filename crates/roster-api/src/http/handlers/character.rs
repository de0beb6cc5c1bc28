//! Character handlers for the REST API.

use std::time::Instant;

use axum::extract::{Path, State};

use roster_types::character::{CharacterDetail, CharacterList};

use crate::http::error::AppError;
use crate::http::response::NoStoreJson;
use crate::state::AppState;

/// GET /api/characters - List every character in dataset order.
pub async fn list_characters(State(state): State<AppState>) -> NoStoreJson<CharacterList> {
    let start = Instant::now();

    let characters = state.character_service.resolve_all();

    tracing::debug!(
        count = characters.len(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "Listed characters"
    );

    NoStoreJson(CharacterList { characters })
}

/// GET /api/characters/{slug} - Get one character with sampled quotes.
pub async fn get_character(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<NoStoreJson<CharacterDetail>, AppError> {
    let start = Instant::now();

    let character = state.character_service.resolve_by_slug(&slug)?;

    tracing::debug!(
        %slug,
        id = character.id,
        elapsed_us = start.elapsed().as_micros() as u64,
        "Resolved character"
    );

    Ok(NoStoreJson(CharacterDetail::from(character)))
}

use thiserror::Error;

/// Errors related to character lookups and view-model construction.
#[derive(Debug, Error)]
pub enum CharacterError {
    #[error("character '{0}' not found")]
    NotFound(String),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Errors raised while loading the character dataset at startup.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset '{origin}': {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

//! Application state wiring the dataset and services together.
//!
//! AppState holds the concrete service instances used by both CLI and REST API.
//! The service is generic over the repository trait, but AppState pins it to
//! the JSON dataset implementation.

use std::path::PathBuf;
use std::sync::Arc;

use roster_core::service::character::CharacterService;
use roster_infra::dataset::JsonCharacterRepository;
use roster_types::config::ServerConfig;

/// Concrete type alias for the service generic pinned to the infra implementation.
pub type ConcreteCharacterService = CharacterService<JsonCharacterRepository>;

/// Shared application state.
///
/// The dataset is loaded once and never written, so cloning the state only
/// clones `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub character_service: Arc<ConcreteCharacterService>,
    pub config: Arc<ServerConfig>,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Load the dataset named by `config` (or the bundled one) and wire services.
    pub async fn init(data_dir: PathBuf, config: ServerConfig) -> anyhow::Result<Self> {
        let repo = JsonCharacterRepository::load(config.dataset_path.as_deref()).await?;
        Ok(Self::from_repository(repo, data_dir, config))
    }

    /// Wire state around an already-loaded repository.
    pub fn from_repository(
        repo: JsonCharacterRepository,
        data_dir: PathBuf,
        config: ServerConfig,
    ) -> Self {
        Self {
            character_service: Arc::new(CharacterService::new(repo)),
            config: Arc::new(config),
            data_dir,
        }
    }
}

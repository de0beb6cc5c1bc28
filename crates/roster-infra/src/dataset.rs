//! JSON character dataset.
//!
//! The bundled dataset is compiled into the binary; an on-disk file can be
//! served instead. Either way the records are parsed once at startup and held
//! in memory for the life of the process.

use std::path::Path;

use roster_core::character::slug::find_slug_collisions;
use roster_core::repository::character::CharacterRepository;
use roster_types::character::RawCharacter;
use roster_types::error::DatasetError;

/// Dataset shipped with the binary.
pub const BUNDLED_DATASET: &str = include_str!("../../../data/characters.json");

/// Origin label used in logs and errors for the bundled dataset.
const BUNDLED_ORIGIN: &str = "<bundled>";

/// Parse a JSON array of raw character records.
pub fn parse_characters(json: &str, origin: &str) -> Result<Vec<RawCharacter>, DatasetError> {
    serde_json::from_str(json).map_err(|source| DatasetError::Parse {
        origin: origin.to_string(),
        source,
    })
}

/// In-memory repository over a parsed JSON dataset.
#[derive(Debug, Clone)]
pub struct JsonCharacterRepository {
    records: Vec<RawCharacter>,
}

impl JsonCharacterRepository {
    /// Wrap already-parsed records.
    pub fn from_records(records: Vec<RawCharacter>) -> Self {
        Self { records }
    }

    /// Parse the dataset compiled into the binary.
    pub fn bundled() -> Result<Self, DatasetError> {
        let records = parse_characters(BUNDLED_DATASET, BUNDLED_ORIGIN)?;
        Ok(Self::from_checked(records, BUNDLED_ORIGIN))
    }

    /// Read and parse a dataset file.
    pub async fn from_file(path: &Path) -> Result<Self, DatasetError> {
        let origin = path.display().to_string();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| DatasetError::Io {
                path: origin.clone(),
                source,
            })?;
        let records = parse_characters(&json, &origin)?;
        Ok(Self::from_checked(records, &origin))
    }

    /// Load from `path` when given, otherwise the bundled dataset.
    pub async fn load(path: Option<&Path>) -> Result<Self, DatasetError> {
        match path {
            Some(path) => Self::from_file(path).await,
            None => Self::bundled(),
        }
    }

    fn from_checked(records: Vec<RawCharacter>, origin: &str) -> Self {
        for collision in find_slug_collisions(&records) {
            tracing::warn!(
                slug = %collision.slug,
                ids = ?collision.ids,
                "Duplicate character slug; lookups resolve to the first record"
            );
        }
        tracing::info!(origin, count = records.len(), "Character dataset loaded");
        Self::from_records(records)
    }
}

impl CharacterRepository for JsonCharacterRepository {
    fn all(&self) -> &[RawCharacter] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::character::slug::character_slug;
    use tempfile::TempDir;

    #[test]
    fn bundled_dataset_parses() {
        let repo = JsonCharacterRepository::bundled().unwrap();
        assert!(!repo.is_empty());
        assert!(repo.find_by_slug("philip-fry").is_some());
        assert!(repo.find_by_slug("bender-rodriguez").is_some());
    }

    #[test]
    fn bundled_dataset_has_unique_slugs_and_ids() {
        let repo = JsonCharacterRepository::bundled().unwrap();
        assert!(find_slug_collisions(repo.all()).is_empty());

        let mut ids: Vec<i64> = repo.all().iter().map(|c| c.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), repo.len());
    }

    #[test]
    fn bundled_records_resolve_by_their_slug() {
        let repo = JsonCharacterRepository::bundled().unwrap();
        for record in repo.all() {
            let found = repo.find_by_slug(&character_slug(&record.name)).unwrap();
            assert_eq!(found.id, record.id);
        }
    }

    #[test]
    fn parse_characters_rejects_malformed_json() {
        let err = parse_characters("[{\"id\": 1", "test").unwrap_err();
        assert!(matches!(err, DatasetError::Parse { ref origin, .. } if origin == "test"));
    }

    #[test]
    fn parse_characters_rejects_missing_name() {
        assert!(parse_characters(r#"[{"id": 1}]"#, "test").is_err());
    }

    #[tokio::test]
    async fn from_file_reads_dataset() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("characters.json");
        tokio::fs::write(
            &path,
            r#"[
                {"id": 1, "name": {"first": "Philip", "last": "Fry"}},
                {"id": 2, "name": {"first": "Zapp", "last": "Brannigan"}, "sayings": ["If we hit that bullseye..."]}
            ]"#,
        )
        .await
        .unwrap();

        let repo = JsonCharacterRepository::load(Some(&path)).await.unwrap();
        assert_eq!(repo.len(), 2);
        assert_eq!(repo.find_by_slug("zapp-brannigan").unwrap().id, 2);
    }

    #[tokio::test]
    async fn from_file_missing_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let err = JsonCharacterRepository::from_file(&tmp.path().join("nope.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }

    #[tokio::test]
    async fn load_without_path_uses_bundled() {
        let repo = JsonCharacterRepository::load(None).await.unwrap();
        assert_eq!(repo.len(), JsonCharacterRepository::bundled().unwrap().len());
    }
}

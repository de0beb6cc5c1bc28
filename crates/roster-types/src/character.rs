use serde::{Deserialize, Deserializer, Serialize};

/// A character record exactly as it appears in the dataset.
///
/// Records are immutable once loaded; every derived field lives on
/// [`CharacterViewModel`] instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCharacter {
    pub id: i64,
    pub name: RawName,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub home_planet: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    /// Free text. Some datasets store ages as numbers, so both are accepted.
    #[serde(default, deserialize_with = "string_or_number")]
    pub age: Option<String>,
    #[serde(default)]
    pub images: RawImages,
    #[serde(default)]
    pub sayings: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawName {
    #[serde(default)]
    pub first: String,
    #[serde(default)]
    pub middle: Option<String>,
    #[serde(default)]
    pub last: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawImages {
    #[serde(default)]
    pub main: Option<String>,
    #[serde(rename = "head-shot", default)]
    pub head_shot: Option<String>,
}

impl RawImages {
    /// The main image, treating an empty string as absent.
    pub fn main(&self) -> Option<&str> {
        non_empty(self.main.as_deref())
    }

    /// The head-shot image, treating an empty string as absent.
    pub fn head_shot(&self) -> Option<&str> {
        non_empty(self.head_shot.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        Some(other) => Some(other.to_string()),
    })
}

/// UI-ready representation of a character, recomputed on every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterViewModel {
    pub id: i64,
    pub name: DisplayName,
    /// URL-safe unique identifier derived from the full name ("Philip Fry" -> "philip-fry").
    pub slug: String,
    pub description: String,
    pub gender: String,
    pub species: String,
    pub home_planet: String,
    pub occupation: String,
    pub age: String,
    /// Resolved avatar URL. Never empty.
    pub avatar: String,
    pub images: ImageSet,
    pub sayings: Vec<String>,
    pub skills: Vec<String>,
    /// Up to five sayings in unspecified order, or the generic fallback lines.
    pub quotes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayName {
    pub first: String,
    pub middle: String,
    pub last: String,
    pub full: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageSet {
    pub main: String,
    #[serde(rename = "head-shot")]
    pub head_shot: String,
    pub additional: Vec<String>,
}

/// Body of `GET /api/characters`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterList {
    pub characters: Vec<CharacterViewModel>,
}

/// Body of `GET /api/characters/{slug}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterDetail {
    pub character: CharacterViewModel,
    pub quotes: Vec<QuoteEntry>,
}

impl From<CharacterViewModel> for CharacterDetail {
    fn from(character: CharacterViewModel) -> Self {
        let quotes = character
            .quotes
            .iter()
            .map(|q| QuoteEntry { quote: q.clone() })
            .collect();
        Self { character, quotes }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteEntry {
    pub quote: String,
}

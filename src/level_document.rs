use std::fmt;
use std::path::Path;
use serde::Deserialize;
use serde_json::Value;
use crate::errors::DocumentError;
use crate::file_utils::FileManager;

// @module: Level-container document model and loading

/// A parsed level-container document.
///
/// The model is deliberately tolerant: level and word fields are optional,
/// and list elements that do not match the expected shape are captured as a
/// typed `Malformed` slot instead of failing the whole document. Downstream
/// code decides what to skip and keeps count of what it skipped.
#[derive(Debug, Clone, Deserialize)]
pub struct LevelContainerDocument {
    /// Ordered levels, in document order
    pub levels: Vec<LevelSlot>,
}

/// One element of the `levels` array
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LevelSlot {
    /// A well-formed level mapping
    Level(Level),
    /// Anything else found in the array; kept for position stability
    Malformed(Value),
}

/// A single level and its word entries
#[derive(Debug, Clone, Deserialize)]
pub struct Level {
    /// Level identifier; absent ids fall back to a positional label
    #[serde(default)]
    pub id: Option<LevelId>,

    /// Ordered word entries, in document order
    #[serde(default)]
    pub words: Option<Vec<WordSlot>>,
}

/// Level identifiers appear as JSON numbers or strings in the wild
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum LevelId {
    Number(i64),
    Text(String),
}

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One element of a level's `words` array
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WordSlot {
    /// A well-formed word entry
    Entry(WordEntry),
    /// Anything else; still occupies a position
    Malformed(Value),
}

/// A word entry with its display text and audio asset reference
#[derive(Debug, Clone, Deserialize)]
pub struct WordEntry {
    /// Display text of the word
    #[serde(default)]
    pub word: Option<String>,

    /// Referenced audio filename; case-sensitive, may be absent or empty
    #[serde(default)]
    pub filename: Option<String>,
}

impl LevelContainerDocument {
    /// Parse a document from JSON text.
    ///
    /// Invalid JSON is a `Parse` error; valid JSON whose root is not an
    /// object with a `levels` array is a `Structural` error. Both carry the
    /// resource name for reporting.
    pub fn from_json_str(content: &str, resource: &str) -> Result<Self, DocumentError> {
        let value: Value = serde_json::from_str(content).map_err(|e| DocumentError::Parse {
            resource: resource.to_string(),
            message: e.to_string(),
        })?;

        let levels_value = match value {
            Value::Object(mut map) => match map.remove("levels") {
                Some(arr @ Value::Array(_)) => arr,
                _ => return Err(DocumentError::Structural(resource.to_string())),
            },
            _ => return Err(DocumentError::Structural(resource.to_string())),
        };

        // Each slot is untagged: well-formed mappings become Level, anything
        // else lands in Malformed, so this cannot fail on an array.
        let slots: Vec<LevelSlot> = serde_json::from_value(levels_value).map_err(|e| {
            DocumentError::Parse {
                resource: resource.to_string(),
                message: e.to_string(),
            }
        })?;

        Ok(LevelContainerDocument { levels: slots })
    }

    /// Load a document from disk, classifying failures.
    ///
    /// Missing files, empty or whitespace-only files, invalid JSON and
    /// structurally unusable documents each map to their own
    /// [`DocumentError`] variant so the caller can report them distinctly.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let resource = path.display().to_string();

        if !FileManager::file_exists(path) {
            return Err(DocumentError::Missing(resource));
        }

        let content = FileManager::read_to_string(path)
            .map_err(|e| DocumentError::Parse {
                resource: resource.clone(),
                message: e.to_string(),
            })?;

        if content.trim().is_empty() {
            return Err(DocumentError::Empty(resource));
        }

        Self::from_json_str(&content, &resource)
    }
}

/*!
 * Tests for the level-container document model and loading
 */

use anyhow::Result;
use audioref::errors::DocumentError;
use audioref::level_document::{LevelContainerDocument, LevelId, LevelSlot, WordSlot};
use crate::common;

/// Test that a well-formed document parses with every level intact
#[test]
fn test_from_json_str_withValidDocument_shouldParseAllLevels() -> Result<()> {
    let doc = LevelContainerDocument::from_json_str(common::SAMPLE_DOCUMENT, "sample.json")
        .map_err(anyhow::Error::from)?;

    assert_eq!(doc.levels.len(), 2);
    match &doc.levels[0] {
        LevelSlot::Level(level) => {
            assert_eq!(level.id, Some(LevelId::Number(1)));
            let words = level.words.as_ref().unwrap();
            assert_eq!(words.len(), 2);
            match &words[0] {
                WordSlot::Entry(entry) => {
                    assert_eq!(entry.word.as_deref(), Some("rose"));
                    assert_eq!(entry.filename.as_deref(), Some("bianca"));
                }
                WordSlot::Malformed(_) => panic!("expected a well-formed word entry"),
            }
        }
        LevelSlot::Malformed(_) => panic!("expected a well-formed level"),
    }

    Ok(())
}

/// Test that invalid JSON is classified as a parse error
#[test]
fn test_from_json_str_withInvalidJson_shouldReturnParseError() {
    let result = LevelContainerDocument::from_json_str("{ not json", "bad.json");
    assert!(matches!(result, Err(DocumentError::Parse { .. })));
}

/// Test that a root-level array is classified as structural
#[test]
fn test_from_json_str_withArrayRoot_shouldReturnStructuralError() {
    let result = LevelContainerDocument::from_json_str("[1, 2, 3]", "array.json");
    assert!(matches!(result, Err(DocumentError::Structural(_))));
}

/// Test that an object without a levels field is classified as structural
#[test]
fn test_from_json_str_withMissingLevels_shouldReturnStructuralError() {
    let result = LevelContainerDocument::from_json_str(r#"{"name": "game"}"#, "nolevels.json");
    assert!(matches!(result, Err(DocumentError::Structural(_))));
}

/// Test that a non-array levels field is classified as structural
#[test]
fn test_from_json_str_withNonArrayLevels_shouldReturnStructuralError() {
    let result = LevelContainerDocument::from_json_str(r#"{"levels": 42}"#, "badlevels.json");
    assert!(matches!(result, Err(DocumentError::Structural(_))));
}

/// Test that a non-mapping element in levels becomes a typed malformed slot
#[test]
fn test_from_json_str_withMalformedLevelSlot_shouldCaptureAsMalformed() -> Result<()> {
    let content = r#"{"levels": [ "not a level", { "id": 2, "words": [] } ]}"#;
    let doc = LevelContainerDocument::from_json_str(content, "mixed.json")
        .map_err(anyhow::Error::from)?;

    assert_eq!(doc.levels.len(), 2);
    assert!(matches!(doc.levels[0], LevelSlot::Malformed(_)));
    assert!(matches!(doc.levels[1], LevelSlot::Level(_)));

    Ok(())
}

/// Test that a word entry with a non-string filename becomes malformed
#[test]
fn test_from_json_str_withNonStringFilename_shouldCaptureWordAsMalformed() -> Result<()> {
    let content = r#"{"levels": [ { "id": 1, "words": [ { "word": "x", "filename": 7 } ] } ]}"#;
    let doc = LevelContainerDocument::from_json_str(content, "numfile.json")
        .map_err(anyhow::Error::from)?;

    match &doc.levels[0] {
        LevelSlot::Level(level) => {
            let words = level.words.as_ref().unwrap();
            assert!(matches!(words[0], WordSlot::Malformed(_)));
        }
        LevelSlot::Malformed(_) => panic!("level itself should be well-formed"),
    }

    Ok(())
}

/// Test that string level ids are accepted
#[test]
fn test_from_json_str_withStringLevelId_shouldParseId() -> Result<()> {
    let content = r#"{"levels": [ { "id": "intro", "words": [] } ]}"#;
    let doc = LevelContainerDocument::from_json_str(content, "strid.json")
        .map_err(anyhow::Error::from)?;

    match &doc.levels[0] {
        LevelSlot::Level(level) => {
            assert_eq!(level.id, Some(LevelId::Text("intro".to_string())));
        }
        LevelSlot::Malformed(_) => panic!("expected a well-formed level"),
    }

    Ok(())
}

/// Test that load classifies a nonexistent file as missing
#[test]
fn test_load_withMissingFile_shouldReturnMissing() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("does_not_exist.json");

    let result = LevelContainerDocument::load(&path);
    assert!(matches!(result, Err(DocumentError::Missing(_))));

    Ok(())
}

/// Test that load classifies a zero-byte file as empty
#[test]
fn test_load_withEmptyFile_shouldReturnEmpty() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(&temp_dir.path().to_path_buf(), "empty.json", "")?;

    let result = LevelContainerDocument::load(&path);
    assert!(matches!(result, Err(DocumentError::Empty(_))));

    Ok(())
}

/// Test that load classifies a whitespace-only file as empty
#[test]
fn test_load_withWhitespaceOnlyFile_shouldReturnEmpty() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(&temp_dir.path().to_path_buf(), "blank.json", "  \n\t\n")?;

    let result = LevelContainerDocument::load(&path);
    assert!(matches!(result, Err(DocumentError::Empty(_))));

    Ok(())
}

/// Test that load parses a well-formed document from disk
#[test]
fn test_load_withValidFile_shouldParseDocument() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_sample_document(&temp_dir.path().to_path_buf(), "levels.json")?;

    let doc = LevelContainerDocument::load(&path).map_err(anyhow::Error::from)?;
    assert_eq!(doc.levels.len(), 2);

    Ok(())
}

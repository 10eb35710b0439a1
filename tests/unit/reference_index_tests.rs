/*!
 * Tests for the reference index
 */

use audioref::reconcile::{Reference, ReferenceIndex};

fn reference(document: &str, level: &str, position: usize, filename: &str, word: &str) -> Reference {
    Reference {
        document: document.to_string(),
        level: level.to_string(),
        position,
        filename: filename.to_string(),
        word: Some(word.to_string()),
    }
}

/// Test that a filename referenced once never appears as a duplicate
#[test]
fn test_duplicates_withSingleReference_shouldBeEmpty() {
    let mut index = ReferenceIndex::new();
    index.insert(reference("a.json", "1", 1, "bianca", "rose"));

    assert_eq!(index.len(), 1);
    assert_eq!(index.duplicates().count(), 0);
}

/// Test that two references to the same filename form one group of two
#[test]
fn test_duplicates_withTwoReferences_shouldFormOneGroup() {
    let mut index = ReferenceIndex::new();
    index.insert(reference("a.json", "1", 1, "bianca", "rose"));
    index.insert(reference("b.json", "14", 2, "bianca", "rosa"));

    let duplicates: Vec<_> = index.duplicates().collect();
    assert_eq!(duplicates.len(), 1);

    let (filename, references) = duplicates[0];
    assert_eq!(filename, "bianca");
    assert_eq!(references.len(), 2);
    // Insertion order preserved: document order, then scan order
    assert_eq!(references[0].document, "a.json");
    assert_eq!(references[1].document, "b.json");
}

/// Test that differently-cased filenames stay distinct keys
#[test]
fn test_insert_withMixedCase_shouldKeepDistinctKeys() {
    let mut index = ReferenceIndex::new();
    index.insert(reference("a.json", "1", 1, "Bianca", "rose"));
    index.insert(reference("a.json", "1", 2, "bianca", "rosa"));

    assert_eq!(index.len(), 2);
    assert_eq!(index.duplicates().count(), 0);
}

/// Test that duplicate groups iterate sorted by filename
#[test]
fn test_duplicates_withSeveralGroups_shouldIterateSorted() {
    let mut index = ReferenceIndex::new();
    for filename in ["zeta", "zeta", "alfa", "alfa", "media", "media"] {
        index.insert(reference("a.json", "1", 1, filename, "w"));
    }

    let keys: Vec<&str> = index.duplicates().map(|(filename, _)| filename).collect();
    assert_eq!(keys, vec!["alfa", "media", "zeta"]);
}

/// Test the distinct filename set and reference count
#[test]
fn test_filenameSet_withRepeatedInsertions_shouldDeduplicate() {
    let mut index = ReferenceIndex::new();
    index.insert(reference("a.json", "1", 1, "uno", "w"));
    index.insert(reference("a.json", "2", 1, "uno", "w"));
    index.insert(reference("a.json", "2", 2, "due", "w"));

    let set = index.filename_set();
    assert_eq!(set.len(), 2);
    assert!(set.contains("uno"));
    assert!(set.contains("due"));
    assert_eq!(index.reference_count(), 3);
}

/// Test emptiness and lookup
#[test]
fn test_get_withUnknownFilename_shouldReturnNone() {
    let index = ReferenceIndex::new();
    assert!(index.is_empty());
    assert!(index.get("bianca").is_none());
}

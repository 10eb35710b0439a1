use std::slice;
use crate::level_document::{LevelContainerDocument, LevelSlot, WordSlot};

// @module: Reference extraction from level-container documents

/// One occurrence of an audio filename inside a level-container document.
///
/// Position numbering is 1-based over every word slot encountered, including
/// malformed ones, so positions stay stable for valid siblings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Name of the source document
    pub document: String,

    /// Level identifier, or a positional `L<n>` label when the id is absent
    pub level: String,

    /// 1-based position of the word entry within its level
    pub position: usize,

    /// The referenced filename, trimmed but otherwise exact
    pub filename: String,

    /// Display text of the word, when present
    pub word: Option<String>,
}

/// Counters accumulated while extracting one document.
///
/// Only complete once the extractor has been exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    /// References yielded
    pub references: usize,

    /// Level slots skipped because they were not well-formed mappings
    pub skipped_levels: usize,

    /// Word slots skipped because they were not well-formed mappings
    pub skipped_words: usize,

    /// Well-formed word entries with an absent or empty filename
    pub empty_filenames: usize,
}

impl ExtractionStats {
    /// Total slots that were present but unusable
    pub fn skipped(&self) -> usize {
        self.skipped_levels + self.skipped_words
    }
}

/// Lazy, one-shot iterator over the references of a single document.
///
/// Walks levels in document order and word slots in level order. Malformed
/// slots are counted and skipped without disturbing position numbering.
pub struct ReferenceExtractor<'a> {
    document: &'a str,
    levels: slice::Iter<'a, LevelSlot>,
    level_index: usize,
    current: Option<CurrentLevel<'a>>,
    stats: ExtractionStats,
}

struct CurrentLevel<'a> {
    label: String,
    words: slice::Iter<'a, WordSlot>,
    position: usize,
}

impl<'a> ReferenceExtractor<'a> {
    /// Create an extractor for `doc`, attributing references to `document`
    pub fn new(document: &'a str, doc: &'a LevelContainerDocument) -> Self {
        ReferenceExtractor {
            document,
            levels: doc.levels.iter(),
            level_index: 0,
            current: None,
            stats: ExtractionStats::default(),
        }
    }

    /// Counters gathered so far; complete after the iterator is exhausted
    pub fn stats(&self) -> ExtractionStats {
        self.stats
    }
}

impl<'a> Iterator for ReferenceExtractor<'a> {
    type Item = Reference;

    fn next(&mut self) -> Option<Reference> {
        loop {
            if let Some(current) = self.current.as_mut() {
                for slot in current.words.by_ref() {
                    current.position += 1;
                    match slot {
                        WordSlot::Entry(entry) => {
                            let filename = entry.filename.as_deref().unwrap_or("").trim();
                            if filename.is_empty() {
                                self.stats.empty_filenames += 1;
                                continue;
                            }
                            self.stats.references += 1;
                            return Some(Reference {
                                document: self.document.to_string(),
                                level: current.label.clone(),
                                position: current.position,
                                filename: filename.to_string(),
                                word: entry.word.clone(),
                            });
                        }
                        WordSlot::Malformed(_) => {
                            self.stats.skipped_words += 1;
                        }
                    }
                }
                self.current = None;
            }

            let slot = self.levels.next()?;
            self.level_index += 1;
            match slot {
                LevelSlot::Level(level) => {
                    let label = level
                        .id
                        .as_ref()
                        .map(|id| id.to_string())
                        .unwrap_or_else(|| format!("L{}", self.level_index));
                    let words = level.words.as_deref().unwrap_or(&[]);
                    self.current = Some(CurrentLevel {
                        label,
                        words: words.iter(),
                        position: 0,
                    });
                }
                LevelSlot::Malformed(_) => {
                    self.stats.skipped_levels += 1;
                }
            }
        }
    }
}

/// Collect every reference of a document together with the final counters
pub fn extract_references(
    document: &str,
    doc: &LevelContainerDocument,
) -> (Vec<Reference>, ExtractionStats) {
    let mut extractor = ReferenceExtractor::new(document, doc);
    let references: Vec<Reference> = extractor.by_ref().collect();
    let stats = extractor.stats();
    (references, stats)
}

use std::path::Path;
use log::{debug, warn};
use crate::errors::DocumentError;
use crate::file_utils::FileManager;
use crate::level_document::LevelContainerDocument;
use super::extract::{ExtractionStats, ReferenceExtractor};
use super::index::ReferenceIndex;

// @module: Shared Load -> Extract -> Index batch stage

/// How loading one document ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Document parsed; references extracted with the given counters
    Loaded(ExtractionStats),

    /// The file does not exist
    Missing,

    /// The file is empty or whitespace only
    Empty,

    /// The content is not valid JSON
    ParseError(String),

    /// Valid JSON without a usable `levels` array
    Structural,
}

impl LoadOutcome {
    /// True when references were extracted from this document
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// Load status of one scanned document, for reporting
#[derive(Debug, Clone)]
pub struct DocumentStatus {
    /// Document name as supplied by the caller
    pub name: String,

    /// File size in bytes, when the file exists
    pub size: Option<u64>,

    /// Outcome of the load attempt
    pub outcome: LoadOutcome,
}

/// Result of scanning a document set: per-document statuses plus the index
#[derive(Debug)]
pub struct DocumentScan {
    /// One status per target document, in caller order
    pub documents: Vec<DocumentStatus>,

    /// Every extracted reference, grouped by exact filename
    pub index: ReferenceIndex,
}

impl DocumentScan {
    /// Number of documents that actually contributed references
    pub fn loaded_count(&self) -> usize {
        self.documents
            .iter()
            .filter(|status| status.outcome.is_loaded())
            .count()
    }

    /// Number of documents that were skipped for any reason
    pub fn skipped_count(&self) -> usize {
        self.documents.len() - self.loaded_count()
    }
}

/// Scan the named documents under `data_dir` in the given order.
///
/// Every per-document failure is recorded in the returned statuses and the
/// scan continues with the remaining documents; no single bad file aborts
/// the batch.
pub fn scan_documents<P: AsRef<Path>>(data_dir: P, documents: &[String]) -> DocumentScan {
    let data_dir = data_dir.as_ref();
    let mut statuses = Vec::with_capacity(documents.len());
    let mut index = ReferenceIndex::new();

    for name in documents {
        let path = data_dir.join(name);
        let size = FileManager::file_size(&path).ok();

        let outcome = match LevelContainerDocument::load(&path) {
            Ok(doc) => {
                let mut extractor = ReferenceExtractor::new(name, &doc);
                index.extend(extractor.by_ref());
                let stats = extractor.stats();
                if stats.skipped() > 0 {
                    warn!(
                        "Skipped {} malformed entries in {}",
                        stats.skipped(),
                        name
                    );
                }
                debug!("Loaded {}: {} references", name, stats.references);
                LoadOutcome::Loaded(stats)
            }
            Err(DocumentError::Missing(_)) => {
                warn!("Document not found: {}", name);
                LoadOutcome::Missing
            }
            Err(DocumentError::Empty(_)) => {
                warn!("Document is empty: {}", name);
                LoadOutcome::Empty
            }
            Err(DocumentError::Parse { message, .. }) => {
                warn!("Failed to parse {}: {}", name, message);
                LoadOutcome::ParseError(message)
            }
            Err(DocumentError::Structural(_)) => {
                warn!("Document has no usable levels structure: {}", name);
                LoadOutcome::Structural
            }
        };

        statuses.push(DocumentStatus {
            name: name.clone(),
            size,
            outcome,
        });
    }

    DocumentScan {
        documents: statuses,
        index,
    }
}

use std::path::PathBuf;
use super::extract::Reference;
use super::scan::{scan_documents, DocumentScan, DocumentStatus};

// @module: Duplicate filename detection across a document set

/// One filename referenced more than once, with every occurrence
#[derive(Debug, Clone)]
pub struct DuplicateGroup {
    /// The duplicated filename value, exact and case-sensitive
    pub filename: String,

    /// Every occurrence, in document order then within-document scan order
    pub references: Vec<Reference>,
}

/// Outcome of a full duplicate scan
#[derive(Debug)]
pub struct DuplicateReport {
    /// Per-document load status, in caller order
    pub documents: Vec<DocumentStatus>,

    /// Duplicate groups, sorted by filename
    pub groups: Vec<DuplicateGroup>,
}

impl DuplicateReport {
    /// Number of documents that contributed references
    pub fn loaded_count(&self) -> usize {
        self.documents
            .iter()
            .filter(|status| status.outcome.is_loaded())
            .count()
    }

    /// True when at least one document was actually scanned.
    ///
    /// "No duplicates found" is only meaningful in that case; an empty
    /// report over zero loaded documents says nothing about the content.
    pub fn scanned_any(&self) -> bool {
        self.loaded_count() > 0
    }

    /// Number of duplicate groups
    pub fn duplicate_count(&self) -> usize {
        self.groups.len()
    }
}

/// Batch duplicate scanner over an ordered document list
pub struct DuplicateFinder {
    data_dir: PathBuf,
    documents: Vec<String>,
}

impl DuplicateFinder {
    /// Create a finder for the named documents under `data_dir`
    pub fn new<P: Into<PathBuf>>(data_dir: P, documents: Vec<String>) -> Self {
        DuplicateFinder {
            data_dir: data_dir.into(),
            documents,
        }
    }

    /// Run the scan and build the duplicate report.
    ///
    /// Never fails: per-document problems are recorded in the report and
    /// the remaining documents are still scanned.
    pub fn run(&self) -> DuplicateReport {
        let scan = scan_documents(&self.data_dir, &self.documents);
        Self::from_scan(scan)
    }

    /// Build the report from an existing scan
    pub fn from_scan(scan: DocumentScan) -> DuplicateReport {
        let groups = scan
            .index
            .duplicates()
            .map(|(filename, references)| DuplicateGroup {
                filename: filename.to_string(),
                references: references.to_vec(),
            })
            .collect();

        DuplicateReport {
            documents: scan.documents,
            groups,
        }
    }
}

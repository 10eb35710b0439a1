/*!
 * Content-reference reconciliation for level-container documents.
 *
 * This module contains the reusable core shared by the two maintenance
 * tools. It is split into several submodules:
 *
 * - `extract`: Reference extraction from parsed documents
 * - `index`: Grouping of references by exact filename
 * - `scan`: The shared Load -> Extract -> Index batch stage
 * - `duplicates`: Duplicate filename detection and reporting
 * - `filter`: Candidate list classification against referenced filenames
 */

// Re-export main types for easier usage
pub use self::extract::{extract_references, ExtractionStats, Reference, ReferenceExtractor};
pub use self::index::ReferenceIndex;
pub use self::scan::{scan_documents, DocumentScan, DocumentStatus, LoadOutcome};
pub use self::duplicates::{DuplicateFinder, DuplicateGroup, DuplicateReport};
pub use self::filter::{CandidateFilter, CandidateRecord, ExclusionReasons, FilterOutcome, Verdict};

// Submodules
pub mod duplicates;
pub mod extract;
pub mod filter;
pub mod index;
pub mod scan;

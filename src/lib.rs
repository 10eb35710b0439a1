/*!
 * # audioref - Audio reference reconciliation for word-game level content
 *
 * A Rust library and CLI for maintaining the static audio/JSON content of a
 * word game.
 *
 * ## Features
 *
 * - Detect duplicate audio filenames referenced across level-definition
 *   JSON documents, with exact case-sensitive matching
 * - Filter a candidate list of audio files against the filenames already
 *   referenced (plus a manual exclusion list) to produce a "still needed" list
 * - Tolerant document loading: missing, empty, unparseable and structurally
 *   unusable documents are reported per document and never abort a batch
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Run configuration and defaults
 * - `level_document`: Level-container document model and loading
 * - `reconcile`: The reconciliation core:
 *   - `reconcile::extract`: Reference extraction
 *   - `reconcile::index`: Grouping by exact filename
 *   - `reconcile::scan`: The shared Load -> Extract -> Index stage
 *   - `reconcile::duplicates`: Duplicate detection and reporting
 *   - `reconcile::filter`: Candidate list classification
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod level_document;
pub mod reconcile;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use errors::{AppError, DocumentError, OutputError};
pub use level_document::{Level, LevelContainerDocument, WordEntry};
pub use reconcile::{
    CandidateFilter, DuplicateFinder, DuplicateReport, Reference, ReferenceIndex,
};

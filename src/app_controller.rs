use anyhow::{anyhow, Context, Result};
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use crate::app_config::Config;
use crate::errors::OutputError;
use crate::file_utils::FileManager;
use crate::reconcile::{
    scan_documents, CandidateFilter, DuplicateFinder, DuplicateReport, FilterOutcome, LoadOutcome,
    Verdict,
};

// @module: Application controller for the content maintenance tools

/// Main application controller.
///
/// Owns the run configuration and drives the two batch pipelines. The
/// reconciliation logic lives in [`crate::reconcile`]; this layer only
/// loads resources, renders reports to stdout and persists the filter
/// output.
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    /// Check if the controller holds a usable configuration
    pub fn is_initialized(&self) -> bool {
        self.config.validate().is_ok()
    }

    /// Run the duplicate scan and print the report to stdout
    pub fn run_duplicates(&self) -> Result<()> {
        let finder = DuplicateFinder::new(&self.config.data_dir, self.config.documents.clone());
        let report = finder.run();
        self.print_duplicate_report(&report);
        Ok(())
    }

    /// Run the candidate filter: scan documents, classify the candidate
    /// list, persist kept lines and print the summary to stdout
    pub fn run_filter(&self, force_overwrite: bool) -> Result<()> {
        let scan = scan_documents(&self.config.data_dir, &self.config.documents);
        let referenced = scan.index.filename_set();
        info!(
            "Collected {} unique referenced filenames from {} document(s)",
            referenced.len(),
            scan.loaded_count()
        );

        let input_path = self.resource_path(&self.config.candidate_input);
        if !FileManager::file_exists(&input_path) {
            return Err(anyhow!("Candidate list not found: {:?}", input_path));
        }

        let content = FileManager::read_to_string(&input_path)?;
        let filter = CandidateFilter::new(referenced, self.config.manual_exclusion_set());
        let outcome = filter.partition(content.lines());

        let output_path = self.resource_path(&self.config.filtered_output);
        if output_path.exists() && !force_overwrite {
            warn!(
                "Output file already exists: {:?}. Use -f to force overwrite.",
                output_path
            );
            return Ok(());
        }

        Self::persist_kept_lines(&output_path, &outcome)
            .with_context(|| format!("Failed to write filtered output: {:?}", output_path))?;

        self.print_filter_summary(&filter, &outcome, &output_path);
        Ok(())
    }

    /// Resolve a resource name against the configured data directory
    fn resource_path(&self, name: &str) -> PathBuf {
        Path::new(&self.config.data_dir).join(name)
    }

    /// Write every kept line in one piece.
    ///
    /// Write failures surface as [`OutputError`] so they are never mistaken
    /// for a skipped input resource.
    fn persist_kept_lines(path: &Path, outcome: &FilterOutcome) -> Result<(), OutputError> {
        fs::write(path, outcome.output_text())?;
        Ok(())
    }

    /// Render the duplicate report to stdout
    fn print_duplicate_report(&self, report: &DuplicateReport) {
        println!(
            "Scanning {} document(s) in {}",
            report.documents.len(),
            self.config.data_dir
        );
        println!("{}", "=".repeat(72));

        for status in &report.documents {
            let size = status
                .size
                .map(|bytes| format!(" ({} bytes)", bytes))
                .unwrap_or_default();
            match &status.outcome {
                LoadOutcome::Loaded(stats) => {
                    let skipped = if stats.skipped() > 0 {
                        format!(", {} malformed entries skipped", stats.skipped())
                    } else {
                        String::new()
                    };
                    println!(
                        "  {}{} ... loaded, {} reference(s){}",
                        status.name, size, stats.references, skipped
                    );
                }
                LoadOutcome::Missing => println!("  {} ... MISSING", status.name),
                LoadOutcome::Empty => println!("  {}{} ... EMPTY", status.name, size),
                LoadOutcome::ParseError(message) => {
                    println!("  {}{} ... PARSE ERROR: {}", status.name, size, message);
                }
                LoadOutcome::Structural => {
                    println!("  {}{} ... NO LEVELS STRUCTURE", status.name, size);
                }
            }
        }

        let loaded = report.loaded_count();
        let empty = report
            .documents
            .iter()
            .filter(|status| status.outcome == LoadOutcome::Empty)
            .count();
        let skipped = report.documents.len() - loaded - empty;
        println!("{}", "-".repeat(72));
        println!(
            "Documents: {} loaded, {} skipped, {} empty",
            loaded, skipped, empty
        );
        println!();
        println!("Duplicate filenames (exact match):");

        for group in &report.groups {
            println!(
                "  '{}' ({} occurrences)",
                group.filename,
                group.references.len()
            );
            for reference in &group.references {
                println!(
                    "    - {} [Level {}, Word #{}] = '{}'",
                    reference.document,
                    reference.level,
                    reference.position,
                    reference.word.as_deref().unwrap_or("UNKNOWN")
                );
            }
        }

        if !report.scanned_any() {
            println!("  (no documents scanned; duplicate status unknown)");
        } else if report.groups.is_empty() {
            println!("  none - all filenames are unique across all documents");
        } else {
            println!();
            println!("{} duplicate filename(s) found", report.duplicate_count());
        }
    }

    /// Render the filter summary to stdout
    fn print_filter_summary(
        &self,
        filter: &CandidateFilter,
        outcome: &FilterOutcome,
        output_path: &Path,
    ) {
        for record in &outcome.records {
            match record.verdict {
                Verdict::Kept => println!("  + {}", record.line),
                Verdict::Excluded(reasons) => {
                    println!("  - {} ({})", record.line, reasons);
                }
            }
        }

        println!();
        println!(
            "Wrote {:?} ({} line(s))",
            output_path,
            outcome.kept_count()
        );
        println!(
            "Results: {} kept, {} excluded",
            outcome.kept_count(),
            outcome.excluded_count()
        );

        let sample: Vec<&str> = filter
            .referenced()
            .iter()
            .take(5)
            .map(String::as_str)
            .collect();
        println!(
            "Referenced filenames: {} (sample: {:?})",
            filter.referenced().len(),
            sample
        );

        if !filter.manual_exclusions().is_empty() {
            let applied: Vec<&str> = filter
                .manual_exclusions()
                .iter()
                .map(String::as_str)
                .collect();
            println!("Manual exclusions applied: {:?}", applied);
        }
    }
}

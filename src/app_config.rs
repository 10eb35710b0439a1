use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::default::Default;

/// Application configuration module
/// This module holds the run configuration for both tools: which documents
/// to scan, where the candidate list lives, and the manual exclusion list.
/// The defaults reproduce the fixed literal lists the content pipeline has
/// always used; the CLI may override them per invocation. No configuration
/// file or environment variable is ever consulted.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Directory containing the content files
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Level-container documents to scan, in scan order
    #[serde(default = "default_documents")]
    pub documents: Vec<String>,

    /// Candidate list resource read by the filter
    #[serde(default = "default_candidate_input")]
    pub candidate_input: String,

    /// Output resource the filter writes kept lines to
    #[serde(default = "default_filtered_output")]
    pub filtered_output: String,

    /// Basenames always treated as already handled
    #[serde(default = "default_manual_exclusions")]
    pub manual_exclusions: Vec<String>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Config {
    /// The manual exclusion list as a lookup set
    pub fn manual_exclusion_set(&self) -> BTreeSet<String> {
        self.manual_exclusions.iter().cloned().collect()
    }

    /// Validate the configuration before a run
    pub fn validate(&self) -> Result<()> {
        if self.documents.is_empty() {
            return Err(anyhow!("Document list must not be empty"));
        }
        if self.documents.iter().any(|name| name.trim().is_empty()) {
            return Err(anyhow!("Document names must not be blank"));
        }
        if self.candidate_input.trim().is_empty() {
            return Err(anyhow!("Candidate input name must not be blank"));
        }
        if self.filtered_output.trim().is_empty() {
            return Err(anyhow!("Filtered output name must not be blank"));
        }
        if self.candidate_input == self.filtered_output {
            return Err(anyhow!(
                "Candidate input and filtered output must be different resources"
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            documents: default_documents(),
            candidate_input: default_candidate_input(),
            filtered_output: default_filtered_output(),
            manual_exclusions: default_manual_exclusions(),
            log_level: LogLevel::default(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_data_dir() -> String {
    ".".to_string()
}

fn default_documents() -> Vec<String> {
    vec![
        "levels1-12.json".to_string(),
        "levels13-24.json".to_string(),
        "levels25-36.json".to_string(),
    ]
}

fn default_candidate_input() -> String {
    "input.txt".to_string()
}

fn default_filtered_output() -> String {
    "output.txt".to_string()
}

fn default_manual_exclusions() -> Vec<String> {
    vec![
        "angosciose".to_string(),
        "bianche".to_string(),
        "ceri".to_string(),
        "capito l'otto".to_string(),
    ]
}

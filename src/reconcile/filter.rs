use std::collections::BTreeSet;
use std::fmt;
use crate::file_utils::FileManager;

// @module: Candidate list classification against referenced filenames

/// Which exclusion rule(s) matched a candidate line.
///
/// A candidate can match both at once; both reasons stay reportable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExclusionReasons {
    /// Basename matches a filename referenced in the documents
    pub referenced: bool,

    /// Basename is on the manual exclusion list
    pub manual: bool,
}

impl ExclusionReasons {
    /// True when at least one rule matched
    pub fn any(&self) -> bool {
        self.referenced || self.manual
    }
}

impl fmt::Display for ExclusionReasons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.referenced, self.manual) {
            (true, true) => write!(f, "document match + manual exclusion"),
            (true, false) => write!(f, "document match"),
            (false, true) => write!(f, "manual exclusion"),
            (false, false) => write!(f, "none"),
        }
    }
}

/// Classification of a single candidate line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The line goes to the output
    Kept,

    /// The line is dropped, for the recorded reason(s)
    Excluded(ExclusionReasons),
}

/// One classified candidate line
#[derive(Debug, Clone)]
pub struct CandidateRecord {
    /// The original line text, without its line terminator
    pub line: String,

    /// Basename the classification was computed from
    pub basename: String,

    /// Kept or excluded
    pub verdict: Verdict,
}

impl CandidateRecord {
    /// True when this line goes to the output
    pub fn is_kept(&self) -> bool {
        matches!(self.verdict, Verdict::Kept)
    }
}

/// Ordered classification result over a whole candidate list
#[derive(Debug, Default)]
pub struct FilterOutcome {
    /// One record per non-blank candidate line, in input order
    pub records: Vec<CandidateRecord>,
}

impl FilterOutcome {
    /// Kept lines, original text, original order
    pub fn kept_lines(&self) -> impl Iterator<Item = &str> {
        self.records
            .iter()
            .filter(|record| record.is_kept())
            .map(|record| record.line.as_str())
    }

    /// Number of kept lines
    pub fn kept_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_kept()).count()
    }

    /// Number of excluded lines
    pub fn excluded_count(&self) -> usize {
        self.records.len() - self.kept_count()
    }

    /// The output resource content: every kept line, newline-terminated.
    ///
    /// Empty when nothing was kept; no trailing blank line beyond the last.
    pub fn output_text(&self) -> String {
        let mut text = String::new();
        for line in self.kept_lines() {
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}

/// Classifies candidate lines against referenced filenames and a manual
/// exclusion list.
///
/// Both sets are fixed at construction time. Matching is exact string
/// equality on the candidate's basename; no case folding, no substring
/// matching, no deduplication of the candidate list.
pub struct CandidateFilter {
    referenced: BTreeSet<String>,
    manual_exclusions: BTreeSet<String>,
}

impl CandidateFilter {
    /// Create a filter over the given referenced and excluded basenames
    pub fn new(referenced: BTreeSet<String>, manual_exclusions: BTreeSet<String>) -> Self {
        CandidateFilter {
            referenced,
            manual_exclusions,
        }
    }

    /// Referenced basenames this filter was built with
    pub fn referenced(&self) -> &BTreeSet<String> {
        &self.referenced
    }

    /// Manual exclusions this filter was built with
    pub fn manual_exclusions(&self) -> &BTreeSet<String> {
        &self.manual_exclusions
    }

    /// Classify one candidate line.
    ///
    /// The basename is the trimmed line with directory and extension
    /// stripped: "clips/rosa bianca.wav" classifies as "rosa bianca".
    pub fn classify(&self, line: &str) -> (String, Verdict) {
        let basename = FileManager::basename(line.trim());
        let reasons = ExclusionReasons {
            referenced: self.referenced.contains(&basename),
            manual: self.manual_exclusions.contains(&basename),
        };
        let verdict = if reasons.any() {
            Verdict::Excluded(reasons)
        } else {
            Verdict::Kept
        };
        (basename, verdict)
    }

    /// Classify an ordered sequence of candidate lines.
    ///
    /// Blank lines are ignored. Duplicate lines are each classified
    /// independently and each appear (or not) independently in the result.
    pub fn partition<I, S>(&self, lines: I) -> FilterOutcome
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut records = Vec::new();
        for line in lines {
            let line: String = line.into();
            if line.trim().is_empty() {
                continue;
            }
            let (basename, verdict) = self.classify(&line);
            records.push(CandidateRecord {
                line,
                basename,
                verdict,
            });
        }
        FilterOutcome { records }
    }
}

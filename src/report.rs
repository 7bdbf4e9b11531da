//! Run results: per-file outcomes plus the final tallies, renderable as
//! plain status lines or as JSON.

use std::path::Path;

use chrono::Utc;
use serde::Serialize;

use crate::injector::{InjectError, Outcome};

/// Result recorded for a single candidate file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Path relative to the scanned directory where possible.
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileReport {
    /// Status lines for this file, one per significant action.
    pub fn lines(&self) -> Vec<String> {
        match (&self.outcome, &self.error) {
            (Some(Outcome::Skipped), _) => {
                vec![format!("Skipping {} - already has auth", self.path)]
            }
            (Some(Outcome::NavNotFound), _) => {
                vec![format!("No nav-links found in {}", self.path)]
            }
            (Some(Outcome::Updated { scripts_added }), _) => {
                let mut lines = vec![format!("Added auth buttons to {}", self.path)];
                if *scripts_added {
                    lines.push(format!("Added auth scripts to {}", self.path));
                }
                lines
            }
            (Some(Outcome::Unchanged), _) => {
                vec![format!("Nothing to inject in {}", self.path)]
            }
            (None, Some(error)) => vec![format!("Failed on {}: {}", self.path, error)],
            (None, None) => vec![],
        }
    }
}

/// Aggregate result of a batch run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub dry_run: bool,
    pub reports: Vec<FileReport>,
    /// Count of files that were (or, under dry-run, would have been)
    /// rewritten.
    pub updated: u32,
    /// Count of files that could not be processed.
    pub failed: u32,
    /// RFC 3339 timestamp, stamped when the batch loop ends.
    pub completed_at: String,
}

impl RunSummary {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            reports: Vec::new(),
            updated: 0,
            failed: 0,
            completed_at: String::new(),
        }
    }

    /// Record a terminal outcome for one file.
    pub fn record(&mut self, path: &Path, outcome: Outcome) {
        if matches!(outcome, Outcome::Updated { .. }) {
            self.updated += 1;
        }
        self.reports.push(FileReport {
            path: path.display().to_string(),
            outcome: Some(outcome),
            error: None,
        });
    }

    /// Record a per-file failure without aborting the run.
    pub fn record_failure(&mut self, path: &Path, err: &InjectError) {
        self.failed += 1;
        self.reports.push(FileReport {
            path: path.display().to_string(),
            outcome: None,
            error: Some(err.to_string()),
        });
    }

    /// Stamp the completion time. Called once, when the batch loop ends.
    pub fn finish(&mut self) {
        self.completed_at = Utc::now().to_rfc3339();
    }

    /// Final human-readable lines.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "Done! Updated {} HTML files with auth functionality.",
            self.updated
        )];
        if self.failed > 0 {
            lines.push(format!("{} file(s) could not be processed.", self.failed));
        }
        if self.dry_run {
            lines.push("Dry run - nothing was written.".to_string());
        }
        lines
    }
}

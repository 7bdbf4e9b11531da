//! The transformation pipeline: guard, nav insertion, script insertion,
//! write-back.
//!
//! Matching is textual, not structural. The container pattern approximates
//! HTML parsing with a regex, so a nested `</div>` inside the nav block
//! terminates the match early. Known limitation; pages this tool targets
//! keep the nav-links block flat.

mod error;


pub use error::InjectError;

use std::path::{Path, PathBuf};

use regex::{Captures, Regex};
use serde::Serialize;

use crate::encoding::{read_text, write_text};
use crate::fragments::{
    AUTH_MARKER, BODY_CLOSE, NAV_CLOSE, NAV_CLOSE_INDENT, NAV_FRAGMENT, NAV_PATTERN,
    SCRIPT_FRAGMENT, SCRIPT_MARKER,
};
use crate::report::RunSummary;
use crate::scanner::list_candidates;

/// Terminal state of a single candidate file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Idempotence marker already present; file untouched.
    Skipped,
    /// No nav container matched; file untouched, scripts not inserted.
    NavNotFound,
    /// At least one fragment was inserted and the file rewritten.
    Updated { scripts_added: bool },
    /// A container matched but nothing needed inserting.
    Unchanged,
}

/// Mutable builder for an injection run.
pub struct InjectorBuilder {
    directory: PathBuf,
    dry_run: bool,
}

impl InjectorBuilder {
    /// Create a builder targeting the given directory.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            dry_run: false,
        }
    }

    /// Process without writing anything back.
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    /// Compile the container pattern and build the injector.
    pub fn build(self) -> Result<Injector, InjectError> {
        Ok(Injector {
            directory: self.directory,
            dry_run: self.dry_run,
            nav_container: Regex::new(NAV_PATTERN)?,
        })
    }
}

/// One-shot batch editor for a directory of static HTML pages.
pub struct Injector {
    directory: PathBuf,
    dry_run: bool,
    nav_container: Regex,
}

impl Injector {
    /// Run the guard / insert / write pipeline on a single file.
    pub fn process(&self, path: &Path) -> Result<Outcome, InjectError> {
        let mut source = read_text(path)?;

        if source.content.contains(AUTH_MARKER) {
            return Ok(Outcome::Skipped);
        }

        if !self.nav_container.is_match(&source.content) {
            return Ok(Outcome::NavNotFound);
        }

        let with_nav = self
            .nav_container
            .replace_all(&source.content, |caps: &Captures| {
                append_auth_controls(&caps[0])
            })
            .into_owned();
        let mut modified = with_nav != source.content;
        source.content = with_nav;

        let mut scripts_added = false;
        if !source.content.contains(SCRIPT_MARKER) {
            let with_scripts = source.content.replacen(
                BODY_CLOSE,
                &format!("{}\n{}", SCRIPT_FRAGMENT, BODY_CLOSE),
                1,
            );
            scripts_added = with_scripts != source.content;
            modified = modified || scripts_added;
            source.content = with_scripts;
        }

        if !modified {
            return Ok(Outcome::Unchanged);
        }

        if !self.dry_run {
            write_text(path, &source)?;
        }

        Ok(Outcome::Updated { scripts_added })
    }

    /// Process every candidate under the configured directory. Per-file
    /// failures are collected into the summary; the run continues with the
    /// next file.
    pub fn run(&self) -> Result<RunSummary, InjectError> {
        let candidates = list_candidates(&self.directory)?;
        let mut summary = RunSummary::new(self.dry_run);

        for path in candidates {
            let display = path.strip_prefix(&self.directory).unwrap_or(&path);
            match self.process(&path) {
                Ok(outcome) => summary.record(display, outcome),
                Err(err) => summary.record_failure(display, &err),
            }
        }

        summary.finish();
        Ok(summary)
    }
}

/// Insert the auth controls just before the span's last closing tag. The
/// span always ends with `</div>`, so the anchor is always present.
fn append_auth_controls(span: &str) -> String {
    match span.rfind(NAV_CLOSE) {
        Some(at) => format!(
            "{}{}{}{}",
            &span[..at],
            NAV_FRAGMENT,
            NAV_CLOSE_INDENT,
            &span[at..]
        ),
        None => span.to_string(),
    }
}

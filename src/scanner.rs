//! Candidate discovery: which files in the target directory are eligible
//! for injection.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::injector::InjectError;

/// Extension a candidate must carry (matched case-insensitively).
pub const HTML_EXTENSION: &str = "html";

/// Fixture pages (`test-*.html`) are never rewritten.
pub const TEST_FIXTURE_PREFIX: &str = "test-";

/// Collect injection candidates: `.html` files directly inside `dir`,
/// excluding test fixtures. Subdirectories are not descended into. Results
/// are sorted by path so runs are deterministic across platforms.
pub fn list_candidates(dir: &Path) -> Result<Vec<PathBuf>, InjectError> {
    let mut candidates = Vec::new();

    for entry in WalkDir::new(dir).max_depth(1).follow_links(false) {
        let entry = entry.map_err(|e| InjectError::Scan {
            dir: dir.display().to_string(),
            source: e,
        })?;
        let path = entry.path();

        if !path.is_file() || !is_candidate(path) {
            continue;
        }

        candidates.push(path.to_path_buf());
    }

    candidates.sort();
    Ok(candidates)
}

fn is_candidate(path: &Path) -> bool {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    if extension != HTML_EXTENSION {
        return false;
    }

    path.file_name()
        .and_then(|n| n.to_str())
        .map(|name| !name.starts_with(TEST_FIXTURE_PREFIX))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "<html></html>").unwrap();
    }

    #[test]
    fn test_only_html_files_are_candidates() {
        let dir = tempfile::TempDir::new().unwrap();
        touch(dir.path(), "index.html");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "script.js");

        let candidates = list_candidates(dir.path()).unwrap();
        assert_eq!(candidates.len(), 1);
        assert!(candidates[0].ends_with("index.html"));
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let dir = tempfile::TempDir::new().unwrap();
        touch(dir.path(), "PAGE.HTML");

        let candidates = list_candidates(dir.path()).unwrap();
        assert_eq!(candidates.len(), 1);
    }

    #[test]
    fn test_fixtures_are_excluded() {
        let dir = tempfile::TempDir::new().unwrap();
        touch(dir.path(), "index.html");
        touch(dir.path(), "test-login.html");
        touch(dir.path(), "test-profile.html");

        let candidates = list_candidates(dir.path()).unwrap();
        assert_eq!(candidates.len(), 1);
        assert!(candidates[0].ends_with("index.html"));
    }

    #[test]
    fn test_subdirectories_are_not_descended() {
        let dir = tempfile::TempDir::new().unwrap();
        touch(dir.path(), "index.html");
        fs::create_dir(dir.path().join("pages")).unwrap();
        touch(&dir.path().join("pages"), "nested.html");

        let candidates = list_candidates(dir.path()).unwrap();
        assert_eq!(candidates.len(), 1);
        assert!(candidates[0].ends_with("index.html"));
    }

    #[test]
    fn test_candidates_are_sorted() {
        let dir = tempfile::TempDir::new().unwrap();
        touch(dir.path(), "contact.html");
        touch(dir.path(), "about.html");
        touch(dir.path(), "index.html");

        let candidates = list_candidates(dir.path()).unwrap();
        let names: Vec<_> = candidates
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["about.html", "contact.html", "index.html"]);
    }
}

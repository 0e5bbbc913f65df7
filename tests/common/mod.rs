//! Common test utilities

use std::path::{Path, PathBuf};
use suite_checklist::{ChecklistTemplate, ChecklistWriter, Issue, StaticIssueSource};
use tempfile::TempDir;

/// Create a temporary directory for testing
#[allow(dead_code)] // Test utility for integration tests
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create the `suites/` output directory inside `root`
#[allow(dead_code)] // Test utility for integration tests
pub fn create_suites_dir(root: &Path) -> PathBuf {
    let suites = root.join("suites");
    std::fs::create_dir(&suites).expect("Failed to create suites directory");
    suites
}

/// Writer with the built-in checklist template
#[allow(dead_code)] // Test utility for integration tests
pub fn checklist_writer(output_dir: &Path) -> ChecklistWriter {
    ChecklistWriter::new(
        output_dir,
        ChecklistTemplate::new().expect("Built-in template should compile"),
    )
}

/// Issue source serving the given titles, numbered from the newest down
#[allow(dead_code)] // Test utility for integration tests
pub fn issues_titled(titles: &[&str]) -> StaticIssueSource {
    let count = titles.len() as u64;
    StaticIssueSource::new(
        titles
            .iter()
            .zip((1..=count).rev())
            .map(|(title, number)| Issue::new(number, *title))
            .collect(),
    )
}

/// Names of all files in `dir`, sorted
#[allow(dead_code)] // Test utility for integration tests
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("Should read directory")
        .map(|entry| {
            entry
                .expect("Should read entry")
                .file_name()
                .to_string_lossy()
                .to_string()
        })
        .collect();
    names.sort();
    names
}

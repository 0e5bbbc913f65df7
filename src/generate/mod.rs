//! One checklist generation run: fetch issues, extract suite ids, write files.
//!
//! Runs strictly in order. The output directory is the only record of what has
//! been generated before; within a run, repeated ids are skipped in memory.
//! The first error aborts the run and files already written are kept.

use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, info};

use crate::checklist::{ChecklistError, ChecklistWriter, WriteOutcome};
use crate::issue::{FetchError, IssueSource};
use crate::suite::{suite_ids, SuiteId};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Failed to list issues: {0}")]
    Fetch(#[from] FetchError),

    #[error("Failed to write checklist: {0}")]
    Checklist(#[from] ChecklistError),
}

/// Summary of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateReport {
    /// Issues returned by the source.
    pub issues_seen: usize,
    /// Issues whose title yielded a suite id (duplicates included).
    pub matched: usize,
    /// Suite ids already handled earlier in the same run.
    pub duplicates: usize,
    /// Checklists written.
    pub created: Vec<SuiteId>,
    /// Checklists already on disk.
    pub existing: Vec<SuiteId>,
    /// Checklists a dry run would have written.
    pub planned: Vec<SuiteId>,
}

impl GenerateReport {
    fn record(&mut self, suite_id: SuiteId, outcome: &WriteOutcome) {
        match outcome {
            WriteOutcome::Created(_) => self.created.push(suite_id),
            WriteOutcome::AlreadyExists(_) => self.existing.push(suite_id),
            WriteOutcome::WouldCreate(_) => self.planned.push(suite_id),
        }
    }
}

/// Create a checklist for every new suite announced by a matching issue title.
pub async fn generate_checklists(
    source: &dyn IssueSource,
    writer: &ChecklistWriter,
    title_prefix: &str,
) -> Result<GenerateReport, GenerateError> {
    let issues = source.list_issues().await?;
    debug!(source = source.source_name(), count = issues.len(), "Listed issues");

    let mut report = GenerateReport {
        issues_seen: issues.len(),
        ..GenerateReport::default()
    };
    let mut seen = HashSet::new();

    for suite_id in suite_ids(&issues, title_prefix) {
        report.matched = report.matched.saturating_add(1);
        if !seen.insert(suite_id.clone()) {
            debug!(suite_id = %suite_id, "Suite already handled in this run");
            report.duplicates = report.duplicates.saturating_add(1);
            continue;
        }

        let outcome = writer.write_if_absent(&suite_id).await?;
        report.record(suite_id, &outcome);
    }

    info!(
        issues = report.issues_seen,
        matched = report.matched,
        created = report.created.len(),
        existing = report.existing.len(),
        planned = report.planned.len(),
        "Checklist generation finished"
    );
    Ok(report)
}

#[cfg(test)]
#[path = "generate_tests.rs"]
mod tests;

use super::*;
use crate::checklist::ChecklistTemplate;
use crate::config::DEFAULT_TITLE_PREFIX;
use crate::issue::{Issue, StaticIssueSource};
use async_trait::async_trait;
use tempfile::TempDir;

struct FailingSource;

#[async_trait]
impl IssueSource for FailingSource {
    fn source_name(&self) -> &str {
        "failing"
    }

    async fn list_issues(&self) -> Result<Vec<Issue>, FetchError> {
        Err(FetchError::CommandFailed {
            code: Some(1),
            stderr: "HTTP 401: Bad credentials".to_string(),
        })
    }
}

fn ids(list: &[SuiteId]) -> Vec<&str> {
    list.iter().map(SuiteId::as_str).collect()
}

#[tokio::test]
async fn test_fetch_error_propagates() {
    let temp_dir = TempDir::new().unwrap();
    let writer = ChecklistWriter::new(temp_dir.path(), ChecklistTemplate::new().unwrap());

    let result = generate_checklists(&FailingSource, &writer, DEFAULT_TITLE_PREFIX).await;

    assert!(matches!(
        result,
        Err(GenerateError::Fetch(FetchError::CommandFailed { .. }))
    ));
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_duplicates_are_counted_once() {
    let temp_dir = TempDir::new().unwrap();
    let writer = ChecklistWriter::new(temp_dir.path(), ChecklistTemplate::new().unwrap());
    let source = StaticIssueSource::new(vec![
        Issue::new(3, "New simulation u-ab123 r3"),
        Issue::new(2, "New simulation u-ab123 r2"),
        Issue::new(1, "New simulation u-ab123 r1"),
    ]);

    let report = generate_checklists(&source, &writer, DEFAULT_TITLE_PREFIX)
        .await
        .unwrap();

    assert_eq!(report.issues_seen, 3);
    assert_eq!(report.matched, 3);
    assert_eq!(report.duplicates, 2);
    assert_eq!(ids(&report.created), vec!["u-ab123"]);
    assert!(report.existing.is_empty());
}

#[tokio::test]
async fn test_report_splits_created_and_existing() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("u-bbbbb"), "done").unwrap();
    let writer = ChecklistWriter::new(temp_dir.path(), ChecklistTemplate::new().unwrap());
    let source = StaticIssueSource::new(vec![
        Issue::new(4, "New simulation u-aaaaa"),
        Issue::new(3, "New simulation u-bbbbb"),
        Issue::new(2, "Question about u-ccccc"),
        Issue::new(1, "New simulation — TBD suite id"),
    ]);

    let report = generate_checklists(&source, &writer, DEFAULT_TITLE_PREFIX)
        .await
        .unwrap();

    assert_eq!(report.issues_seen, 4);
    assert_eq!(report.matched, 2);
    assert_eq!(ids(&report.created), vec!["u-aaaaa"]);
    assert_eq!(ids(&report.existing), vec!["u-bbbbb"]);
    assert!(!temp_dir.path().join("u-ccccc").exists());
}

#[tokio::test]
async fn test_dry_run_report() {
    let temp_dir = TempDir::new().unwrap();
    let writer =
        ChecklistWriter::new(temp_dir.path(), ChecklistTemplate::new().unwrap()).dry_run(true);
    let source = StaticIssueSource::new(vec![Issue::new(1, "New simulation u-aaaaa")]);

    let report = generate_checklists(&source, &writer, DEFAULT_TITLE_PREFIX)
        .await
        .unwrap();

    assert_eq!(ids(&report.planned), vec!["u-aaaaa"]);
    assert!(report.created.is_empty());
    assert!(!temp_dir.path().join("u-aaaaa").exists());
}

#[tokio::test]
async fn test_missing_output_dir_aborts_run() {
    let temp_dir = TempDir::new().unwrap();
    let writer = ChecklistWriter::new(
        temp_dir.path().join("suites"),
        ChecklistTemplate::new().unwrap(),
    );
    let source = StaticIssueSource::new(vec![Issue::new(1, "New simulation u-aaaaa")]);

    let result = generate_checklists(&source, &writer, DEFAULT_TITLE_PREFIX).await;

    assert!(matches!(
        result,
        Err(GenerateError::Checklist(ChecklistError::OutputDirMissing(_)))
    ));
}

#[tokio::test]
async fn test_no_matching_issues() {
    let temp_dir = TempDir::new().unwrap();
    let writer = ChecklistWriter::new(temp_dir.path(), ChecklistTemplate::new().unwrap());
    let source = StaticIssueSource::new(vec![Issue::new(1, "Fix typo in README")]);

    let report = generate_checklists(&source, &writer, DEFAULT_TITLE_PREFIX)
        .await
        .unwrap();

    assert_eq!(
        report,
        GenerateReport {
            issues_seen: 1,
            ..GenerateReport::default()
        }
    );
}

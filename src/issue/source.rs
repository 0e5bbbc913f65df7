use async_trait::async_trait;

use super::error::FetchError;
use super::types::Issue;

/// Anything that can list issues from a tracker.
#[async_trait]
pub trait IssueSource: Send + Sync {
    /// Short name used in log output (e.g. "gh").
    fn source_name(&self) -> &str;

    /// List issues in the order the tracker returns them.
    async fn list_issues(&self) -> Result<Vec<Issue>, FetchError>;
}

/// Fixed in-memory issue list.
#[derive(Debug, Clone, Default)]
pub struct StaticIssueSource {
    issues: Vec<Issue>,
}

impl StaticIssueSource {
    #[must_use]
    pub fn new(issues: Vec<Issue>) -> Self {
        Self { issues }
    }
}

#[async_trait]
impl IssueSource for StaticIssueSource {
    fn source_name(&self) -> &str {
        "static"
    }

    async fn list_issues(&self) -> Result<Vec<Issue>, FetchError> {
        Ok(self.issues.clone())
    }
}

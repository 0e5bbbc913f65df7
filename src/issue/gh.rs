//! `gh issue list` adapter.
//!
//! Runs the GitHub CLI in the current working directory, so the repository is
//! whatever `gh` resolves from there unless an explicit `owner/repo` is given.

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use super::error::FetchError;
use super::source::IssueSource;
use super::types::Issue;
use crate::config::{DEFAULT_GH_PROGRAM, DEFAULT_ISSUE_LIMIT, ISSUE_JSON_FIELDS};

#[derive(Debug, Clone)]
pub struct GhIssueSource {
    program: String,
    limit: u32,
    repo: Option<String>,
}

impl GhIssueSource {
    #[must_use]
    pub fn new(program: impl Into<String>, limit: u32) -> Self {
        Self {
            program: program.into(),
            limit,
            repo: None,
        }
    }

    /// Target `owner/repo` instead of the repository of the working directory.
    #[must_use]
    pub fn with_repo(mut self, repo: impl Into<String>) -> Self {
        self.repo = Some(repo.into());
        self
    }

    /// Arguments passed to the CLI, e.g.
    /// `issue list -L 2000 --json number,title,body,labels`.
    #[must_use]
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            "issue".to_string(),
            "list".to_string(),
            "-L".to_string(),
            self.limit.to_string(),
            "--json".to_string(),
            ISSUE_JSON_FIELDS.to_string(),
        ];
        if let Some(repo) = &self.repo {
            args.push("-R".to_string());
            args.push(repo.clone());
        }
        args
    }
}

impl Default for GhIssueSource {
    fn default() -> Self {
        Self::new(DEFAULT_GH_PROGRAM, DEFAULT_ISSUE_LIMIT)
    }
}

#[async_trait]
impl IssueSource for GhIssueSource {
    fn source_name(&self) -> &str {
        &self.program
    }

    async fn list_issues(&self) -> Result<Vec<Issue>, FetchError> {
        let program = which::which(&self.program).map_err(|source| FetchError::ToolNotFound {
            program: self.program.clone(),
            source,
        })?;
        let args = self.args();
        debug!(program = %program.display(), args = ?args, "Listing issues");

        let output = Command::new(&program).args(&args).output().await?;

        if !output.status.success() {
            return Err(FetchError::CommandFailed {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let issues = parse_issue_list(&output.stdout)?;
        info!(count = issues.len(), "Fetched issues");
        Ok(issues)
    }
}

/// Parse the JSON array printed by `gh issue list --json ...`.
pub fn parse_issue_list(stdout: &[u8]) -> Result<Vec<Issue>, FetchError> {
    Ok(serde_json::from_slice(stdout)?)
}

#[cfg(test)]
#[path = "gh_tests.rs"]
mod tests;

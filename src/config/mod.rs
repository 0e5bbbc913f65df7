use std::path::PathBuf;

/// Directory (relative to the working directory) that holds checklist files.
pub const DEFAULT_OUTPUT_DIR: &str = "suites";

/// Maximum number of issues requested from the tracker.
pub const DEFAULT_ISSUE_LIMIT: u32 = 2000;

/// Only issues whose title starts with this prefix are considered.
pub const DEFAULT_TITLE_PREFIX: &str = "New simulation";

/// Issue-tracker CLI used to list issues.
pub const DEFAULT_GH_PROGRAM: &str = "gh";

/// Fields requested from `gh issue list --json`.
pub const ISSUE_JSON_FIELDS: &str = "number,title,body,labels";

/// Resolved settings for one checklist generation run.
///
/// `Default` reproduces the fixed behavior: the first 2000 issues of the
/// current repository, titles starting with "New simulation", files under
/// `suites/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    pub output_dir: PathBuf,
    pub limit: u32,
    pub title_prefix: String,
    /// `owner/repo`; `None` lets the CLI infer it from the working directory.
    pub repo: Option<String>,
    pub gh_program: String,
    pub dry_run: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            limit: DEFAULT_ISSUE_LIMIT,
            title_prefix: DEFAULT_TITLE_PREFIX.to_string(),
            repo: None,
            gh_program: DEFAULT_GH_PROGRAM.to_string(),
            dry_run: false,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

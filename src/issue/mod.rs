pub mod error;
pub mod gh;
pub mod source;
pub mod types;

// Re-export commonly used types
pub use error::FetchError;
pub use gh::{parse_issue_list, GhIssueSource};
pub use source::{IssueSource, StaticIssueSource};
pub use types::{Issue, Label};

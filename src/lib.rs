// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::indexing_slicing
    )
)]

pub mod checklist;
pub mod config;
pub mod generate;
pub mod issue;
pub mod logging;
pub mod suite;

// Re-export commonly used types
pub use checklist::{ChecklistError, ChecklistTemplate, ChecklistWriter, WriteOutcome};
pub use config::GenerateConfig;
pub use generate::{generate_checklists, GenerateError, GenerateReport};
pub use issue::{FetchError, GhIssueSource, Issue, IssueSource, Label, StaticIssueSource};
pub use suite::{extract_suite_id, suite_ids, SuiteId, SuiteIdError};

mod extract;
mod id;

pub use extract::{extract_suite_id, suite_ids};
pub use id::{SuiteId, SuiteIdError, SUITE_ID_REGEX};

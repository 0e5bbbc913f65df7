mod error;
mod template;
mod writer;

pub use error::ChecklistError;
pub use template::{ChecklistContext, ChecklistTemplate, CHECKLIST_TEMPLATE};
pub use writer::{ChecklistWriter, WriteOutcome};

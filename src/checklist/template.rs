use handlebars::Handlebars;
use serde::Serialize;

use super::error::ChecklistError;
use crate::suite::SuiteId;

/// Markdown checklist body. The only placeholder is `{{suite_id}}` in the heading.
pub const CHECKLIST_TEMPLATE: &str = include_str!("../../templates/checklist.md");

const TEMPLATE_NAME: &str = "checklist";

/// Context for the checklist template
/// Placeholders: {{`suite_id`}}
#[derive(Debug, Clone, Serialize)]
pub struct ChecklistContext {
    pub suite_id: String,
}

pub struct ChecklistTemplate {
    handlebars: Handlebars<'static>,
}

impl ChecklistTemplate {
    /// Compile the built-in checklist template.
    pub fn new() -> Result<Self, ChecklistError> {
        Self::from_source(CHECKLIST_TEMPLATE)
    }

    /// Compile a checklist template from markdown source.
    pub fn from_source(source: &str) -> Result<Self, ChecklistError> {
        let mut handlebars = Handlebars::new();
        // Output is markdown, not HTML.
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);
        handlebars.register_template_string(TEMPLATE_NAME, source)?;
        Ok(Self { handlebars })
    }

    pub fn render(&self, suite_id: &SuiteId) -> Result<String, ChecklistError> {
        let context = ChecklistContext {
            suite_id: suite_id.to_string(),
        };
        Ok(self.handlebars.render(TEMPLATE_NAME, &context)?)
    }
}

impl std::fmt::Debug for ChecklistTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChecklistTemplate").finish_non_exhaustive()
    }
}

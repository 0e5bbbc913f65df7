use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChecklistError {
    #[error("Output directory '{0}' does not exist")]
    OutputDirMissing(PathBuf),

    #[error("Failed to write checklist '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Issue tracker CLI '{program}' not found: {source}")]
    ToolNotFound {
        program: String,
        source: which::Error,
    },

    #[error("Failed to run issue tracker CLI: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("Issue listing failed (exit code {code:?}): {stderr}")]
    CommandFailed { code: Option<i32>, stderr: String },

    #[error("Issue listing is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

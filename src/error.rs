use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type shared by every stage of the pipeline.
///
/// `Config`, `InputParse` and `Write` are fatal for a run. `NotFound`, `Task`
/// and `Dataset` raised inside a query task are caught by the coordinator and
/// recorded as failures instead.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("failed to parse input: {0}")]
    InputParse(String),
    #[error("invalid query: {0}")]
    InvalidQuery(String),
    #[error("No matching record found for input '{input_value}' with option '{search_mode}'")]
    NotFound {
        input_value: String,
        search_mode: String,
    },
    #[error("invalid record data: {0}")]
    Dataset(String),
    #[error("task did not complete: {0}")]
    Task(String),
    #[error("failed to write results to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PipelineError {
    /// Whether this error aborts the whole run rather than a single query.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            PipelineError::Config(_) | PipelineError::InputParse(_) | PipelineError::Write { .. }
        )
    }
}

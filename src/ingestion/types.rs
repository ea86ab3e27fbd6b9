//! Ingestion Data Types

use crate::error::PipelineError;
use serde::Serialize;

/// A single `(search mode, input value)` pair. Both fields are trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SearchQuery {
    search_mode: String,
    input_value: String,
}

impl SearchQuery {
    pub fn new(search_mode: &str, input_value: &str) -> Result<Self, PipelineError> {
        let search_mode = search_mode.trim();
        if search_mode.is_empty() {
            return Err(PipelineError::InvalidQuery(
                "Search option cannot be empty".to_string(),
            ));
        }

        let input_value = input_value.trim();
        if input_value.is_empty() {
            return Err(PipelineError::InvalidQuery(
                "Input value cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            search_mode: search_mode.to_string(),
            input_value: input_value.to_string(),
        })
    }

    pub fn search_mode(&self) -> &str {
        &self.search_mode
    }

    pub fn input_value(&self) -> &str {
        &self.input_value
    }
}

/// Why an input entry was left out of the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub index: usize,
    pub reason: String,
}

use crate::ingestion::types::SearchQuery;
use serde::{Deserialize, Serialize};

/// Unique identifier for one query task within a run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TaskId(pub String);

impl TaskId {
    /// Generates a new random UUID v4-based TaskId.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

/// Lifecycle of a query task. `Succeeded` and `Failed` are terminal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum TaskState {
    /// Submitted, waiting for a worker slot.
    Pending,
    /// Holding a worker slot; lookup in progress.
    Running,
    Succeeded,
    Failed { error: String },
}

impl TaskState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskState::Succeeded | TaskState::Failed { .. })
    }
}

/// Bookkeeping for one task, kept by the coordinator.
#[derive(Debug, Clone)]
pub struct TaskEntry {
    pub query: SearchQuery,
    pub state: TaskState,
    /// Timestamp (ms) when the task was submitted.
    pub created_at: u64,
    /// Timestamp (ms) when the task reached a terminal state.
    pub finished_at: Option<u64>,
}

impl TaskEntry {
    pub fn pending(query: SearchQuery) -> Self {
        Self {
            query,
            state: TaskState::Pending,
            created_at: now_ms(),
            finished_at: None,
        }
    }
}

/// A query that could not be resolved, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureRecord {
    pub input_value: String,
    pub search_mode: String,
    pub error_description: String,
}

impl FailureRecord {
    pub fn new(query: &SearchQuery, error_description: impl Into<String>) -> Self {
        Self {
            input_value: query.input_value().to_string(),
            search_mode: query.search_mode().to_string(),
            error_description: error_description.into(),
        }
    }
}

/// Per-state task counts: `(pending, running, succeeded, failed)`.
pub type StateCounts = (usize, usize, usize, usize);

/// Helper to get the current system time in milliseconds.
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

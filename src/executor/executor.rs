//! Worker Pool Implementation
//!
//! Fans a batch of queries out over a bounded set of workers and gathers the
//! outcomes as they complete.
//!
//! ## Responsibilities
//! - **Bounding**: at most `worker_count` tasks hold a slot at any instant.
//! - **Isolation**: each lookup runs on the blocking pool; an error or panic
//!   in one task becomes a `FailureRecord` and never touches its siblings.
//! - **Collection**: a single loop consumes completions in completion order,
//!   notifies the observer, and appends to the `AggregationSink`.

use super::sink::AggregationSink;
use super::task::execute_query;
use super::types::*;
use crate::error::PipelineError;
use crate::ingestion::types::SearchQuery;
use crate::output::console::ResultObserver;
use crate::output::projection::ProjectedResult;
use crate::relations::normalizer::RelationNormalizer;
use crate::search::store::RecordStore;

use dashmap::DashMap;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Everything a run produced. `results` is in completion order.
#[derive(Debug, Default)]
pub struct PipelineOutcome {
    pub results: Vec<ProjectedResult>,
    pub failures: Vec<FailureRecord>,
}

impl PipelineOutcome {
    pub fn total(&self) -> usize {
        self.results.len() + self.failures.len()
    }
}

/// The engine that drives query execution.
pub struct PipelineCoordinator {
    /// Read-only record source shared by all workers.
    store: Arc<dyn RecordStore>,
    normalizer: RelationNormalizer,
    /// Maximum number of tasks running at once.
    worker_count: usize,
    /// State of every task submitted through this coordinator.
    tasks: Arc<DashMap<TaskId, TaskEntry>>,
}

impl PipelineCoordinator {
    /// Creates a new coordinator. A `worker_count` of zero is raised to one.
    pub fn new(
        store: Arc<dyn RecordStore>,
        normalizer: RelationNormalizer,
        worker_count: usize,
    ) -> Self {
        if worker_count == 0 {
            tracing::warn!("Worker count of 0 requested, using 1");
        }

        Self {
            store,
            normalizer,
            worker_count: worker_count.max(1),
            tasks: Arc::new(DashMap::new()),
        }
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Runs every query to completion and returns all results and failures.
    ///
    /// Returns only once every submitted task is terminal, so
    /// `results.len() + failures.len() == queries.len()`.
    pub async fn run(
        &self,
        queries: Vec<SearchQuery>,
        observer: &dyn ResultObserver,
    ) -> PipelineOutcome {
        tracing::info!(
            "Processing {} queries using up to {} workers",
            queries.len(),
            self.worker_count
        );

        let slots = Arc::new(Semaphore::new(self.worker_count));
        let mut workers = JoinSet::new();
        let mut submitted: HashMap<tokio::task::Id, (TaskId, SearchQuery)> =
            HashMap::with_capacity(queries.len());

        for query in queries {
            let task_id = TaskId::new();
            self.tasks
                .insert(task_id.clone(), TaskEntry::pending(query.clone()));

            let handle = workers.spawn(run_task(
                task_id.clone(),
                query.clone(),
                self.store.clone(),
                self.normalizer,
                self.tasks.clone(),
                slots.clone(),
            ));
            submitted.insert(handle.id(), (task_id, query));
        }

        let mut sink = AggregationSink::new();

        while let Some(joined) = workers.join_next_with_id().await {
            let (id, outcome) = match joined {
                Ok((id, outcome)) => (id, outcome),
                Err(e) => (e.id(), Err(PipelineError::Task(e.to_string()))),
            };

            let Some((task_id, query)) = submitted.remove(&id) else {
                tracing::warn!("Completion for unknown worker {}", id);
                continue;
            };

            match outcome {
                Ok(result) => {
                    self.finish(&task_id, TaskState::Succeeded);
                    observer.on_result(&result);
                    sink.record_result(result);
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to process query '{}' ({}): {}",
                        query.input_value(),
                        query.search_mode(),
                        e
                    );
                    self.finish(
                        &task_id,
                        TaskState::Failed {
                            error: e.to_string(),
                        },
                    );
                    let failure = FailureRecord::new(&query, e.to_string());
                    observer.on_failure(&failure);
                    sink.record_failure(failure);
                }
            }
        }

        tracing::info!(
            "Processing complete: {} success, {} failed",
            sink.success_count(),
            sink.failure_count()
        );

        let (results, failures) = sink.into_parts();
        PipelineOutcome { results, failures }
    }

    pub fn task(&self, task_id: &TaskId) -> Option<TaskEntry> {
        self.tasks.get(task_id).map(|entry| entry.value().clone())
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn task_state_counts(&self) -> StateCounts {
        let mut pending = 0;
        let mut running = 0;
        let mut succeeded = 0;
        let mut failed = 0;

        for entry in self.tasks.iter() {
            match entry.state {
                TaskState::Pending => pending += 1,
                TaskState::Running => running += 1,
                TaskState::Succeeded => succeeded += 1,
                TaskState::Failed { .. } => failed += 1,
            }
        }

        (pending, running, succeeded, failed)
    }

    fn finish(&self, task_id: &TaskId, state: TaskState) {
        if let Some(mut entry) = self.tasks.get_mut(task_id) {
            entry.state = state;
            entry.finished_at = Some(now_ms());
        }
    }
}

fn mark_running(tasks: &DashMap<TaskId, TaskEntry>, task_id: &TaskId) {
    if let Some(mut entry) = tasks.get_mut(task_id) {
        if !entry.state.is_terminal() {
            entry.state = TaskState::Running;
        }
    }
}

/// Waits for a worker slot, then runs the query on the blocking pool.
async fn run_task(
    task_id: TaskId,
    query: SearchQuery,
    store: Arc<dyn RecordStore>,
    normalizer: RelationNormalizer,
    tasks: Arc<DashMap<TaskId, TaskEntry>>,
    slots: Arc<Semaphore>,
) -> Result<ProjectedResult, PipelineError> {
    let _slot = slots
        .acquire_owned()
        .await
        .map_err(|e| PipelineError::Task(e.to_string()))?;

    mark_running(&tasks, &task_id);
    tracing::debug!("Task {} running", task_id.0);

    tokio::task::spawn_blocking(move || execute_query(&query, store.as_ref(), &normalizer))
        .await
        .map_err(|e| PipelineError::Task(e.to_string()))?
}

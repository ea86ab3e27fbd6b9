//! Query Executor Module
//!
//! Runs a batch of search queries concurrently with per-task failure isolation.
//!
//! ## Architecture Overview
//! 1. **Submission**: every `SearchQuery` becomes one task with a `TaskId`,
//!    recorded as `Pending` in the coordinator's task table.
//! 2. **Scheduling**: tasks wait on a semaphore sized to the worker count,
//!    then move to `Running` and execute on tokio's blocking pool, so a
//!    blocking record store cannot stall the runtime.
//! 3. **Completion**: the coordinator drains completions in the order they
//!    finish, marking each task `Succeeded` or `Failed`. Failures are turned
//!    into `FailureRecord`s; nothing is retried.
//!
//! ## Submodules
//! - **`executor`**: The `PipelineCoordinator` worker pool.
//! - **`task`**: A single query's lookup -> normalize -> project pipeline.
//! - **`sink`**: Arrival-ordered accumulation of results and failures.
//! - **`types`**: Task identifiers, states and failure records.

pub mod executor;
pub mod sink;
pub mod task;
pub mod types;

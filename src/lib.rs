//! Skip Trace Query Pipeline
//!
//! Resolves a batch of person-search queries concurrently against a record
//! source, cleans the relationship data on each match, and emits the results
//! to the console and to a single JSON file.
//!
//! ## Modules
//! - **`search`**: Key normalization and the indexed `RecordStore`.
//! - **`relations`**: Deduplication and ordering of relatives and associates.
//! - **`executor`**: The bounded worker pool that runs one task per query and
//!   isolates failures.
//! - **`ingestion`**: Parsing the input query list.
//! - **`output`**: Projection to the output shape, file writer, console printer.
//! - **`config`**: Settings file loading and logging setup.
//! - **`app`**: End-to-end orchestration of a run.

pub mod app;
pub mod config;
pub mod error;
pub mod executor;
pub mod ingestion;
pub mod output;
pub mod relations;
pub mod search;

pub use error::PipelineError;

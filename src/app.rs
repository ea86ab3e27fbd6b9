//! Run Orchestration
//!
//! Wires the pieces together for one batch: load queries, build the record
//! store, run the coordinator with an observer, write the output file.

use crate::config::settings::Settings;
use crate::error::PipelineError;
use crate::executor::executor::PipelineCoordinator;
use crate::executor::types::FailureRecord;
use crate::ingestion::parser::load_queries;
use crate::ingestion::types::SearchQuery;
use crate::output::console::{ConsolePrinter, ResultObserver};
use crate::output::writer::write_results;
use crate::relations::normalizer::RelationNormalizer;
use crate::search::store::{InMemoryRecordStore, RecordStore};

use std::path::PathBuf;
use std::sync::Arc;

/// Tally of a completed run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: usize,
    pub failures: Vec<FailureRecord>,
    pub output_file: PathBuf,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }
}

/// Builds the record store named by the settings, or the reference dataset.
///
/// A dataset that cannot be loaded is a configuration error.
pub fn build_store(settings: &Settings) -> Result<Arc<dyn RecordStore>, PipelineError> {
    let store = match &settings.records_file {
        Some(path) => {
            tracing::debug!("Loading records from {}", path.display());
            InMemoryRecordStore::from_file(path)
        }
        None => InMemoryRecordStore::reference(),
    }
    .map_err(|e| PipelineError::Config(format!("cannot load record dataset: {}", e)))?;

    Ok(Arc::new(store))
}

/// Runs a full batch as described by `settings`, printing results to the console.
pub async fn run(settings: &Settings) -> Result<RunSummary, PipelineError> {
    tracing::info!("Skip Trace starting up");
    tracing::debug!("Input path: {}", settings.input_file.display());
    tracing::debug!("Output path: {}", settings.output_file.display());
    tracing::debug!("Max workers: {}", settings.max_workers);

    let queries = load_queries(&settings.input_file)?;
    if queries.is_empty() {
        tracing::warn!("No queries found in input file. Writing empty results.");
        write_results(&[], &settings.output_file)?;
        return Ok(RunSummary {
            succeeded: 0,
            failed: 0,
            failures: Vec::new(),
            output_file: settings.output_file.clone(),
        });
    }

    let store = build_store(settings)?;
    process(settings, queries, store, &ConsolePrinter).await
}

/// Runs already-loaded queries against `store` and writes the output file.
pub async fn process(
    settings: &Settings,
    queries: Vec<SearchQuery>,
    store: Arc<dyn RecordStore>,
    observer: &dyn ResultObserver,
) -> Result<RunSummary, PipelineError> {
    let coordinator =
        PipelineCoordinator::new(store, RelationNormalizer::new(), settings.max_workers);
    let outcome = coordinator.run(queries, observer).await;

    write_results(&outcome.results, &settings.output_file)?;

    if !outcome.failures.is_empty() {
        tracing::warn!(
            "{} queries failed to process. See logs for details.",
            outcome.failures.len()
        );
    }

    Ok(RunSummary {
        succeeded: outcome.results.len(),
        failed: outcome.failures.len(),
        failures: outcome.failures,
        output_file: settings.output_file.clone(),
    })
}

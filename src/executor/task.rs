//! Query Task
//!
//! The unit of work run by each worker: lookup, relation normalization, projection.

use crate::error::PipelineError;
use crate::ingestion::types::SearchQuery;
use crate::output::projection::{project, ProjectedResult};
use crate::relations::normalizer::RelationNormalizer;
use crate::search::store::RecordStore;

/// Resolves a single query. Store errors are returned unchanged.
pub fn execute_query(
    query: &SearchQuery,
    store: &dyn RecordStore,
    normalizer: &RelationNormalizer,
) -> Result<ProjectedResult, PipelineError> {
    tracing::debug!("Processing query: {:?}", query);

    let record = store.lookup(query.search_mode(), query.input_value())?;
    let record = normalizer.normalize(record);
    let result = project(&record);

    tracing::info!(
        "Processed query '{}' ({}) successfully",
        query.input_value(),
        query.search_mode()
    );
    Ok(result)
}

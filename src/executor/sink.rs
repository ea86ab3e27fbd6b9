use super::types::FailureRecord;
use crate::output::projection::ProjectedResult;

/// Collects task outcomes in arrival order.
///
/// Owned by the coordinator's collector loop, which is the only writer, so
/// appends never race.
#[derive(Debug, Default)]
pub struct AggregationSink {
    results: Vec<ProjectedResult>,
    failures: Vec<FailureRecord>,
}

impl AggregationSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_result(&mut self, result: ProjectedResult) {
        self.results.push(result);
    }

    pub fn record_failure(&mut self, failure: FailureRecord) {
        self.failures.push(failure);
    }

    pub fn results(&self) -> &[ProjectedResult] {
        &self.results
    }

    pub fn success_count(&self) -> usize {
        self.results.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    pub fn into_parts(self) -> (Vec<ProjectedResult>, Vec<FailureRecord>) {
        (self.results, self.failures)
    }
}

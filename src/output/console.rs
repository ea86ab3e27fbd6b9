use super::projection::ProjectedResult;
use super::writer::to_pretty_json;
use crate::executor::types::FailureRecord;

const HEADER: &str = "=== Skip Trace Result ===";
const FOOTER: &str = "=========================";

/// Receives pipeline events as tasks complete, in completion order.
pub trait ResultObserver: Send + Sync {
    fn on_result(&self, result: &ProjectedResult);

    fn on_failure(&self, _failure: &FailureRecord) {}
}

/// Formats one result as the delimited block printed to the console.
pub fn format_result_block(result: &ProjectedResult) -> String {
    let body = to_pretty_json(result).unwrap_or_else(|e| {
        tracing::warn!("Falling back to debug output for result: {}", e);
        format!("{:?}", result)
    });
    format!("\n{}\n{}\n{}\n", HEADER, body, FOOTER)
}

/// Prints every completed result to stdout.
#[derive(Debug, Default)]
pub struct ConsolePrinter;

impl ResultObserver for ConsolePrinter {
    fn on_result(&self, result: &ProjectedResult) {
        println!("{}", format_result_block(result));
    }
}

/// Observer that ignores everything.
#[derive(Debug, Default)]
pub struct SilentObserver;

impl ResultObserver for SilentObserver {
    fn on_result(&self, _result: &ProjectedResult) {}
}

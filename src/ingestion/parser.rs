use super::types::{SearchQuery, SkippedEntry};
use crate::error::PipelineError;

use serde_json::{Map, Value};
use std::path::Path;

const SEARCH_MODE_KEYS: &[&str] = &["search_option", "Search Option"];
const INPUT_VALUE_KEYS: &[&str] = &["input_value", "Input Given", "input"];

/// Outcome of parsing an input document.
#[derive(Debug, Default)]
pub struct ParsedQueries {
    pub queries: Vec<SearchQuery>,
    pub skipped: Vec<SkippedEntry>,
}

/// Loads queries from a JSON file.
///
/// A missing file, invalid JSON or a non-array document is fatal. Individual
/// bad entries are skipped with a warning.
pub fn load_queries(path: &Path) -> Result<Vec<SearchQuery>, PipelineError> {
    if !path.exists() {
        return Err(PipelineError::InputParse(format!(
            "Input file not found at: {}",
            path.display()
        )));
    }

    tracing::debug!("Loading queries from: {}", path.display());

    let text = std::fs::read_to_string(path).map_err(|e| {
        PipelineError::InputParse(format!("cannot read {}: {}", path.display(), e))
    })?;
    let parsed = parse_queries(&text)?;

    tracing::info!(
        "Loaded {} valid queries from {}",
        parsed.queries.len(),
        path.display()
    );
    Ok(parsed.queries)
}

/// Parses an input document already read into memory.
pub fn parse_queries(text: &str) -> Result<ParsedQueries, PipelineError> {
    let raw: Value = serde_json::from_str(text)
        .map_err(|e| PipelineError::InputParse(format!("Invalid JSON in input file: {}", e)))?;

    let Value::Array(items) = raw else {
        return Err(PipelineError::InputParse(
            "Input JSON must be a list of query objects".to_string(),
        ));
    };

    let mut parsed = ParsedQueries::default();
    for (index, item) in items.iter().enumerate() {
        match parse_entry(item) {
            Ok(query) => parsed.queries.push(query),
            Err(reason) => {
                tracing::warn!("Skipping entry at index {}: {} ({})", index, item, reason);
                parsed.skipped.push(SkippedEntry { index, reason });
            }
        }
    }

    Ok(parsed)
}

fn parse_entry(item: &Value) -> Result<SearchQuery, String> {
    let Value::Object(fields) = item else {
        return Err("entry is not an object".to_string());
    };

    let search_mode = first_present(fields, SEARCH_MODE_KEYS);
    let input_value = first_present(fields, INPUT_VALUE_KEYS);

    match (search_mode, input_value) {
        (Some(mode), Some(value)) => SearchQuery::new(mode, value).map_err(|e| e.to_string()),
        _ => Err("missing fields".to_string()),
    }
}

/// The first alias holding a non-empty string.
fn first_present<'a>(fields: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|key| fields.get(*key).and_then(Value::as_str))
        .find(|value| !value.is_empty())
}

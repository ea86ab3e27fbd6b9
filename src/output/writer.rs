use super::projection::ProjectedResult;
use crate::error::PipelineError;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

const INDENT: &[u8] = b"    ";

/// Serializes a value as JSON indented with four spaces. Non-ASCII text is written as-is.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    String::from_utf8(buf)
        .map_err(|e| serde_json::Error::io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Writes all results as a single JSON array, creating parent directories as needed.
pub fn write_results(results: &[ProjectedResult], output_path: &Path) -> Result<(), PipelineError> {
    let to_write_error = |source: io::Error| PipelineError::Write {
        path: output_path.to_path_buf(),
        source,
    };

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_write_error)?;
    }

    tracing::debug!(
        "Writing {} result(s) to {}",
        results.len(),
        output_path.display()
    );

    let json = to_pretty_json(results)
        .map_err(|e| to_write_error(io::Error::new(io::ErrorKind::InvalidData, e)))?;

    let mut file = fs::File::create(output_path).map_err(to_write_error)?;
    file.write_all(json.as_bytes())
        .and_then(|_| file.flush())
        .map_err(|e| {
            tracing::error!(
                "Failed to write results to {}: {}",
                output_path.display(),
                e
            );
            to_write_error(e)
        })
}

use crate::error::PipelineError;

use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Settings path used when neither `--settings` nor the environment names one.
pub const DEFAULT_SETTINGS_PATH: &str = "config/settings.json";

/// Environment variable consulted for the settings path.
pub const SETTINGS_ENV_VAR: &str = "SKIP_TRACE_SETTINGS";

const REQUIRED_KEYS: &[&str] = &["input_file", "output_file", "max_workers", "log_level"];

/// Worker count assumed by callers that build settings without one.
pub const DEFAULT_MAX_WORKERS: usize = 4;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    /// JSON array of queries to run.
    pub input_file: PathBuf,
    /// Where the aggregated results array is written.
    pub output_file: PathBuf,
    /// Upper bound on concurrently running query tasks.
    pub max_workers: usize,
    pub log_level: String,
    /// Optional replacement for the built-in reference dataset.
    #[serde(default)]
    pub records_file: Option<PathBuf>,
}

impl Settings {
    pub fn new(input_file: impl Into<PathBuf>, output_file: impl Into<PathBuf>) -> Self {
        Self {
            input_file: input_file.into(),
            output_file: output_file.into(),
            max_workers: DEFAULT_MAX_WORKERS,
            log_level: "INFO".to_string(),
            records_file: None,
        }
    }

    /// Reads and validates a settings file.
    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        if !path.exists() {
            return Err(PipelineError::Config(format!(
                "Settings file not found at: {}",
                path.display()
            )));
        }

        let text = std::fs::read_to_string(path).map_err(|e| {
            PipelineError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, PipelineError> {
        let raw: Value = serde_json::from_str(text)
            .map_err(|e| PipelineError::Config(format!("Invalid JSON in settings file: {}", e)))?;

        let Value::Object(fields) = &raw else {
            return Err(PipelineError::Config(
                "Settings must be a JSON object".to_string(),
            ));
        };

        let missing: Vec<&str> = REQUIRED_KEYS
            .iter()
            .copied()
            .filter(|key| !fields.contains_key(*key))
            .collect();
        if !missing.is_empty() {
            return Err(PipelineError::Config(format!(
                "Missing required settings: {}",
                missing.join(", ")
            )));
        }

        let settings: Settings = serde_json::from_value(raw)
            .map_err(|e| PipelineError::Config(format!("Invalid settings: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.max_workers == 0 {
            return Err(PipelineError::Config(
                "max_workers must be a positive integer".to_string(),
            ));
        }
        if self.input_file.as_os_str().is_empty() {
            return Err(PipelineError::Config("input_file cannot be empty".to_string()));
        }
        if self.output_file.as_os_str().is_empty() {
            return Err(PipelineError::Config("output_file cannot be empty".to_string()));
        }
        if matches!(&self.records_file, Some(p) if p.as_os_str().is_empty()) {
            return Err(PipelineError::Config("records_file cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Resolves the settings path from an explicit argument, the environment, or the default.
    pub fn locate(explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| std::env::var_os(SETTINGS_ENV_VAR).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH))
    }
}

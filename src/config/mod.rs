//! Configuration Module
//!
//! Loads run settings from a JSON file and sets up logging from them.
//!
//! ## Submodules
//! - **`settings`**: The `Settings` structure, required-key checks and validation.
//! - **`logging`**: `tracing-subscriber` initialization from the configured level.

pub mod logging;
pub mod settings;

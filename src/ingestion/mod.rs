//! Query Ingestion Module
//!
//! Loads the batch of search queries a run will process.
//!
//! ## Workflow
//! 1. **Read**: Loads the input file and parses it as a JSON array.
//! 2. **Recognize**: Accepts either key spelling for each field
//!    (`search_option` / `Search Option`, `input_value` / `Input Given` / `input`).
//! 3. **Validate**: Trims both fields; entries that are not objects, miss a
//!    field, or are blank after trimming are skipped with a warning.

pub mod parser;
pub mod types;

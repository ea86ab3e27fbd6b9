//! Output Module
//!
//! Turns resolved records into the external result shape and emits them.
//!
//! ## Submodules
//! - **`projection`**: `PersonRecord` -> `ProjectedResult` (ordered, optional-key JSON object).
//! - **`writer`**: Writes the aggregated results array to the output file.
//! - **`console`**: Pretty-prints each result as it completes.

pub mod console;
pub mod projection;
pub mod writer;

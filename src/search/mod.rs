//! Person Search Module
//!
//! Resolves search queries against an indexed record source.
//!
//! ## Responsibilities
//! - **Key normalization**: lowercasing and whitespace stripping so differently
//!   formatted names and phone numbers hit the same index entry.
//! - **Lookup**: choosing the phone or name index from the search mode, with a
//!   fallback across both indexes.
//! - **Projection**: copying a stored record into a per-query `PersonRecord`.
//!
//! ## Submodules
//! - **`keys`**: Key normalization helpers.
//! - **`store`**: The `RecordStore` trait and its in-memory implementation.
//! - **`types`**: Stored and resolved record types.

pub mod keys;
pub mod store;
pub mod types;

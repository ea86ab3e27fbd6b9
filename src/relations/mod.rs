//! Relations Module
//!
//! Cleans the relatives and associates lists attached to a resolved person:
//! whitespace normalization, order-stable deduplication, and a deterministic
//! age-then-name ordering.

pub mod normalizer;

#[cfg(test)]
mod tests;

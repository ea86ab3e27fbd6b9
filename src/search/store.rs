//! Record Store
//!
//! Resolves a `(search_mode, input_value)` pair to a [`PersonRecord`]. The
//! [`RecordStore`] trait is the seam the pipeline depends on; the in-memory
//! implementation below indexes a fixed set of stored records by name key and
//! phone key.

use super::keys::normalize_key;
use super::types::{PersonRecord, RawRelation, RelationEntry, StoredRecord};
use crate::error::PipelineError;

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

const REFERENCE_DATASET: &str = include_str!("../../data/reference_records.json");

/// A source of person records.
///
/// Implementations are shared read-only across worker threads and may block
/// inside `lookup` (a network-backed store, for instance).
pub trait RecordStore: Send + Sync {
    fn lookup(&self, search_mode: &str, input_value: &str) -> Result<PersonRecord, PipelineError>;
}

/// Which index a lookup consults first, derived from the search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Phone,
    Name,
    Unknown,
}

impl SearchKind {
    pub fn from_mode(search_mode: &str) -> Self {
        let mode = search_mode.trim().to_lowercase();
        if mode.contains("phone") {
            SearchKind::Phone
        } else if mode.contains("name") {
            SearchKind::Name
        } else {
            SearchKind::Unknown
        }
    }
}

/// Fixed in-memory dataset with a name index and a phone index.
///
/// Both indexes are built once and never mutated, so the store can be shared
/// across tasks without locking. Colliding keys resolve last-write-wins.
pub struct InMemoryRecordStore {
    records: Vec<Arc<StoredRecord>>,
    by_name: HashMap<String, Arc<StoredRecord>>,
    by_phone: HashMap<String, Arc<StoredRecord>>,
}

impl InMemoryRecordStore {
    pub fn from_records(records: Vec<StoredRecord>) -> Self {
        let records: Vec<Arc<StoredRecord>> = records.into_iter().map(Arc::new).collect();

        let mut by_name = HashMap::new();
        let mut by_phone = HashMap::new();
        for record in &records {
            by_name.insert(normalize_key(&record.name_key), record.clone());
            for phone in &record.phone_keys {
                by_phone.insert(normalize_key(phone), record.clone());
            }
        }

        tracing::debug!(
            "Record store initialized with {} record(s), {} name key(s), {} phone key(s)",
            records.len(),
            by_name.len(),
            by_phone.len()
        );

        Self {
            records,
            by_name,
            by_phone,
        }
    }

    /// Parses a JSON array of stored records.
    pub fn from_json_str(json: &str) -> Result<Self, PipelineError> {
        let records: Vec<StoredRecord> =
            serde_json::from_str(json).map_err(|e| PipelineError::Dataset(e.to_string()))?;
        Ok(Self::from_records(records))
    }

    pub fn from_file(path: &Path) -> Result<Self, PipelineError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            PipelineError::Dataset(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&json)
    }

    /// The built-in two-person reference dataset.
    pub fn reference() -> Result<Self, PipelineError> {
        Self::from_json_str(REFERENCE_DATASET)
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn has_name_key(&self, key: &str) -> bool {
        self.by_name.contains_key(&normalize_key(key))
    }

    pub fn has_phone_key(&self, key: &str) -> bool {
        self.by_phone.contains_key(&normalize_key(key))
    }

    fn find(&self, kind: SearchKind, key: &str) -> Option<&Arc<StoredRecord>> {
        let preferred = match kind {
            SearchKind::Phone => self.by_phone.get(key),
            SearchKind::Name => self.by_name.get(key),
            SearchKind::Unknown => None,
        };

        // Fall back to both indexes, name first, whenever the preferred one misses.
        preferred
            .or_else(|| self.by_name.get(key))
            .or_else(|| self.by_phone.get(key))
    }
}

impl RecordStore for InMemoryRecordStore {
    fn lookup(&self, search_mode: &str, input_value: &str) -> Result<PersonRecord, PipelineError> {
        let key = normalize_key(input_value);
        let kind = SearchKind::from_mode(search_mode);

        tracing::info!(
            "Looking up identity for '{}' using search option '{}'",
            input_value,
            search_mode
        );

        match self.find(kind, &key) {
            Some(stored) => Ok(make_person_record(search_mode, input_value, stored)),
            None => {
                let err = PipelineError::NotFound {
                    input_value: input_value.to_string(),
                    search_mode: search_mode.to_string(),
                };
                tracing::error!("{}", err);
                Err(err)
            }
        }
    }
}

fn convert_relations(raw: &[RawRelation]) -> Vec<RelationEntry> {
    raw.iter()
        .filter_map(|item| match item.name.as_deref() {
            Some(name) if !name.is_empty() => Some(RelationEntry {
                name: name.to_string(),
                age: item.age.clone(),
            }),
            _ => None,
        })
        .collect()
}

/// Projects a stored record into a fresh [`PersonRecord`] for one query.
pub fn make_person_record(search_mode: &str, input_given: &str, raw: &StoredRecord) -> PersonRecord {
    let record = PersonRecord {
        search_mode: search_mode.to_string(),
        input_given: input_given.to_string(),
        first_name: raw.first_name.clone(),
        last_name: raw.last_name.clone(),
        age: raw.age.clone(),
        born: raw.born.clone(),
        lives_in: raw.lives_in.clone(),
        street_address: raw.street_address.clone(),
        address_locality: raw.address_locality.clone(),
        address_region: raw.address_region.clone(),
        postal_code: raw.postal_code.clone(),
        county_name: raw.county_name.clone(),
        emails: raw.emails.clone(),
        phones: raw.phones.clone(),
        previous_addresses: raw.previous_addresses.clone(),
        relatives: convert_relations(&raw.relatives),
        associates: convert_relations(&raw.associates),
        person_link: raw.person_link.clone(),
    };

    tracing::debug!("Built PersonRecord from stored data for '{}'", input_given);
    record
}

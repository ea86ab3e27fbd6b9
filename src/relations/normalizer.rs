use crate::search::keys::collapse_whitespace;
use crate::search::types::{PersonRecord, RelationEntry};

use std::cmp::{Ordering, Reverse};
use std::collections::HashSet;

/// Entries without a parseable age order as if aged -1.
const UNKNOWN_AGE_MAGNITUDE: &str = "1";

/// Stateless normalizer for relation lists. Safe to share across workers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelationNormalizer;

impl RelationNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Replaces the record's relatives and associates with normalized lists.
    pub fn normalize(&self, mut record: PersonRecord) -> PersonRecord {
        tracing::debug!(
            "Normalizing relations for {} {}",
            record.first_name,
            record.last_name
        );

        record.relatives = normalize_relations(std::mem::take(&mut record.relatives));
        record.associates = normalize_relations(std::mem::take(&mut record.associates));

        tracing::info!(
            "Relations normalized for {} {}: {} relatives, {} associates",
            record.first_name,
            record.last_name,
            record.relatives.len(),
            record.associates.len()
        );

        record
    }
}

/// Whitespace-normalizes, deduplicates (first occurrence wins) and sorts a relation list.
pub fn normalize_relations(relations: Vec<RelationEntry>) -> Vec<RelationEntry> {
    let cleaned = relations.into_iter().map(clean_entry);
    let mut unique = deduplicate(cleaned);
    sort_relations(&mut unique);
    unique
}

fn clean_entry(entry: RelationEntry) -> RelationEntry {
    RelationEntry {
        name: collapse_whitespace(&entry.name),
        age: entry.age.map(|age| age.trim().to_string()),
    }
}

fn deduplicate(relations: impl Iterator<Item = RelationEntry>) -> Vec<RelationEntry> {
    let mut seen = HashSet::new();
    relations
        .filter(|entry| seen.insert(entry.dedup_key()))
        .collect()
}

/// Integer age of arbitrary width, compared by value.
#[derive(Debug, Clone, PartialEq, Eq)]
struct NumericAge {
    negative: bool,
    /// Decimal digits without leading zeros ("0" for zero).
    digits: String,
}

impl NumericAge {
    fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let (negative, rest) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };
        if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let digits = match rest.trim_start_matches('0') {
            "" => "0",
            digits => digits,
        };
        Some(Self {
            negative: negative && digits != "0",
            digits: digits.to_string(),
        })
    }

    fn unknown() -> Self {
        Self {
            negative: true,
            digits: UNKNOWN_AGE_MAGNITUDE.to_string(),
        }
    }

    fn of(entry: &RelationEntry) -> Self {
        entry
            .age
            .as_deref()
            .and_then(Self::parse)
            .unwrap_or_else(Self::unknown)
    }
}

impl Ord for NumericAge {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (negative, _) => {
                let magnitude = self
                    .digits
                    .len()
                    .cmp(&other.digits.len())
                    .then_with(|| self.digits.cmp(&other.digits));
                if negative {
                    magnitude.reverse()
                } else {
                    magnitude
                }
            }
        }
    }
}

impl PartialOrd for NumericAge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Descending by age, then ascending by lowercase name. Stable.
fn sort_relations(relations: &mut [RelationEntry]) {
    relations.sort_by_cached_key(|entry| {
        (Reverse(NumericAge::of(entry)), entry.name.to_lowercase())
    });
}

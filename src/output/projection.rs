use crate::search::types::{PersonRecord, RelationEntry};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One result object in the output file, keys in emission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectedResult(Map<String, Value>);

impl ProjectedResult {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn non_empty(value: &str) -> Option<Value> {
    (!value.is_empty()).then(|| Value::String(value.to_string()))
}

fn text(value: &Option<String>) -> Option<Value> {
    value.as_deref().and_then(non_empty)
}

fn relations(list: &[RelationEntry]) -> Option<Value> {
    if list.is_empty() {
        return None;
    }
    let items = list
        .iter()
        .map(|rel| {
            let mut item = Map::new();
            item.insert("Name".to_string(), Value::String(rel.name.clone()));
            item.insert(
                "Age".to_string(),
                rel.age.clone().map(Value::String).unwrap_or(Value::Null),
            );
            Value::Object(item)
        })
        .collect();
    Some(Value::Array(items))
}

/// Builds the output object for a record.
///
/// Every candidate key is listed with an optional value; absent and empty
/// values are dropped in a single pass at the end.
pub fn project(record: &PersonRecord) -> ProjectedResult {
    let mut fields: Vec<(String, Option<Value>)> = vec![
        ("Search Option".into(), Some(Value::String(record.search_mode.clone()))),
        ("Input Given".into(), Some(Value::String(record.input_given.clone()))),
        ("First Name".into(), Some(Value::String(record.first_name.clone()))),
        ("Last Name".into(), Some(Value::String(record.last_name.clone()))),
        ("Age".into(), text(&record.age)),
        ("Born".into(), text(&record.born)),
        ("Lives in".into(), text(&record.lives_in)),
        ("Street Address".into(), text(&record.street_address)),
        ("Address Locality".into(), text(&record.address_locality)),
        ("Address Region".into(), text(&record.address_region)),
        ("Postal Code".into(), text(&record.postal_code)),
        ("County Name".into(), text(&record.county_name)),
    ];

    for (idx, email) in record.emails.iter().enumerate() {
        fields.push((format!("Email-{}", idx + 1), non_empty(email)));
    }

    for (idx, phone) in record.phones.iter().enumerate() {
        let n = idx + 1;
        fields.push((format!("Phone-{}", n), non_empty(&phone.number)));
        fields.push((format!("Phone-{} Type", n), text(&phone.phone_type)));
        fields.push((format!("Phone-{} Provider", n), text(&phone.provider)));
    }

    let previous_addresses = if record.previous_addresses.is_empty() {
        None
    } else {
        Some(Value::Array(
            record
                .previous_addresses
                .iter()
                .cloned()
                .map(Value::Object)
                .collect(),
        ))
    };

    fields.push(("Previous Addresses".into(), previous_addresses));
    fields.push(("Relatives".into(), relations(&record.relatives)));
    fields.push(("Associates".into(), relations(&record.associates)));
    fields.push(("Person Link".into(), text(&record.person_link)));

    ProjectedResult(
        fields
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v)))
            .collect(),
    )
}

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An opaque previous-address mapping, passed through to the output verbatim.
pub type AddressMap = Map<String, Value>;

/// A relative or associate attached to a person.
///
/// Two entries are duplicates when their `(lowercase trimmed name, trimmed age)`
/// keys match; see [`RelationEntry::dedup_key`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationEntry {
    pub name: String,
    pub age: Option<String>,
}

impl RelationEntry {
    pub fn new(name: impl Into<String>, age: Option<&str>) -> Self {
        Self {
            name: name.into(),
            age: age.map(str::to_string),
        }
    }

    pub fn dedup_key(&self) -> (String, String) {
        (
            self.name.trim().to_lowercase(),
            self.age.as_deref().unwrap_or("").trim().to_string(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneEntry {
    #[serde(default)]
    pub number: String,
    #[serde(rename = "type", default)]
    pub phone_type: Option<String>,
    #[serde(default)]
    pub provider: Option<String>,
}

/// Relation as it sits in the backing dataset. Either field may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRelation {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Age", default)]
    pub age: Option<String>,
}

/// A person record as held by the record store, including the keys it is indexed under.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoredRecord {
    pub name_key: String,
    #[serde(default)]
    pub phone_keys: Vec<String>,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default)]
    pub born: Option<String>,
    #[serde(default)]
    pub lives_in: Option<String>,
    #[serde(default)]
    pub street_address: Option<String>,
    #[serde(default)]
    pub address_locality: Option<String>,
    #[serde(default)]
    pub address_region: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub county_name: Option<String>,
    #[serde(default)]
    pub emails: Vec<String>,
    #[serde(default)]
    pub phones: Vec<PhoneEntry>,
    #[serde(default)]
    pub previous_addresses: Vec<AddressMap>,
    #[serde(default)]
    pub relatives: Vec<RawRelation>,
    #[serde(default)]
    pub associates: Vec<RawRelation>,
    #[serde(default)]
    pub person_link: Option<String>,
}

/// The resolved entity for one query.
///
/// `search_mode` and `input_given` echo the query that produced it; every
/// other field comes from the matched stored record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PersonRecord {
    pub search_mode: String,
    pub input_given: String,
    pub first_name: String,
    pub last_name: String,
    pub age: Option<String>,
    pub born: Option<String>,
    pub lives_in: Option<String>,
    pub street_address: Option<String>,
    pub address_locality: Option<String>,
    pub address_region: Option<String>,
    pub postal_code: Option<String>,
    pub county_name: Option<String>,
    pub emails: Vec<String>,
    pub phones: Vec<PhoneEntry>,
    pub previous_addresses: Vec<AddressMap>,
    pub relatives: Vec<RelationEntry>,
    pub associates: Vec<RelationEntry>,
    pub person_link: Option<String>,
}

impl PersonRecord {
    pub fn new(search_mode: &str, input_given: &str) -> Self {
        Self {
            search_mode: search_mode.to_string(),
            input_given: input_given.to_string(),
            ..Default::default()
        }
    }
}

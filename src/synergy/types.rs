use crate::{
    cli::types::{EntityId, PersonId},
    error::{BigvError, Result},
};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;


/// Envelope of a `statistics/for/person` response with `include=persons,entities`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatisticsResponse {
    pub data: Vec<StatisticEntry>,
    pub includes: Includes,
}

impl StatisticsResponse {
    /// Typed view of a raw response; any shape mismatch is a malformed response.
    pub fn from_value(response: &Value) -> Result<Self> {
        Self::deserialize(response).map_err(|e| BigvError::malformed(e.to_string()))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Includes {
    pub resources: Resources,
}

/// Side-loaded resources, each bucket keyed by resource id.
#[derive(Debug, Clone, Deserialize)]
pub struct Resources {
    pub entities: BTreeMap<String, Entity>,
    pub persons: BTreeMap<String, Person>,
}

/// Team resource
#[derive(Debug, Clone, Deserialize)]
pub struct Entity {
    #[serde(rename = "entityId")]
    pub entity_id: EntityId,
    #[serde(rename = "nameFullLocal", default)]
    pub name_full_local: Option<String>,
    #[serde(rename = "nameFullInternational", default)]
    pub name_full_international: Option<String>,
}

impl Entity {
    /// Local name, falling back to the international one.
    pub fn display_name(&self) -> Option<&str> {
        pick_name(&self.name_full_local, &self.name_full_international)
    }
}

/// Player resource
#[derive(Debug, Clone, Deserialize)]
pub struct Person {
    #[serde(rename = "personId")]
    pub person_id: PersonId,
    #[serde(rename = "nameFullLocal", default)]
    pub name_full_local: Option<String>,
    #[serde(rename = "nameFullInternational", default)]
    pub name_full_international: Option<String>,
    /// Date of birth exactly as the API formats it.
    #[serde(default)]
    pub dob: Option<String>,
}

impl Person {
    pub fn display_name(&self) -> Option<&str> {
        pick_name(&self.name_full_local, &self.name_full_international)
    }
}

fn pick_name<'a>(local: &'a Option<String>, international: &'a Option<String>) -> Option<&'a str> {
    local
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .or_else(|| international.as_deref().filter(|s| !s.trim().is_empty()))
}

/// One per-person, per-season row of aggregated statistics.
#[derive(Debug, Clone, Deserialize)]
pub struct StatisticEntry {
    #[serde(rename = "personId")]
    pub person_id: PersonId,
    #[serde(rename = "entityId")]
    pub entity_id: EntityId,
    pub statistics: BTreeMap<String, Value>,
}

/// Number of elements in the top-level `data` array, if there is one.
pub fn data_len(response: &Value) -> Option<usize> {
    response.get("data")?.as_array().map(Vec::len)
}

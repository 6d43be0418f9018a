//! Reshape a Synergy person-statistics response into one flat record per player.

use serde_json::Value;
use std::collections::BTreeMap;

use crate::{
    cli::types::{EntityId, PersonId},
    error::{BigvError, Result},
    synergy::{
        schema::{PlayerRecord, StatField, StatValue, UNKNOWN},
        types::{StatisticEntry, StatisticsResponse},
    },
};


/// Normalized output, iterated in ascending person id order.
pub type PlayerTable = BTreeMap<PersonId, PlayerRecord>;

/// What to do with a statistic entry whose person is not in the side-loaded resources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnmatchedPolicy {
    /// Abort the whole normalization.
    #[default]
    Fail,
    /// Drop the entry and keep going.
    Skip,
}

/// Normalize a raw response, failing on entries that reference unknown persons.
pub fn normalize(response: &Value) -> Result<PlayerTable> {
    normalize_with(response, UnmatchedPolicy::Fail)
}

/// Normalize a raw response with an explicit policy for unmatched entries.
pub fn normalize_with(response: &Value, policy: UnmatchedPolicy) -> Result<PlayerTable> {
    let parsed = StatisticsResponse::from_value(response)?;
    normalize_response(&parsed, policy)
}

/// Two passes: materialize the team and player lookups, then apply `data` in order.
///
/// Entries are applied field by field, so when several entries name the same
/// person a later entry overwrites whatever fields it carries (last write
/// wins) and leaves the others as earlier entries set them. An entry whose
/// team is not in the lookup still has its statistics applied; the record's
/// team stays as it was.
pub fn normalize_response(
    response: &StatisticsResponse,
    policy: UnmatchedPolicy,
) -> Result<PlayerTable> {
    let resources = &response.includes.resources;

    let mut teams: BTreeMap<&EntityId, &str> = BTreeMap::new();
    for entity in resources.entities.values() {
        let name = entity.display_name().ok_or_else(|| {
            BigvError::malformed(format!("team {} has no display name", entity.entity_id))
        })?;
        teams.insert(&entity.entity_id, name);
    }

    let mut players = PlayerTable::new();
    for person in resources.persons.values() {
        let name = person.display_name().ok_or_else(|| {
            BigvError::malformed(format!("person {} has no display name", person.person_id))
        })?;
        let dob = person.dob.as_deref().unwrap_or(UNKNOWN);
        players.insert(person.person_id.clone(), PlayerRecord::new(name, dob));
    }

    tracing::debug!(
        teams = teams.len(),
        players = players.len(),
        entries = response.data.len(),
        "lookups built"
    );

    for entry in &response.data {
        let Some(record) = players.get_mut(&entry.person_id) else {
            match policy {
                UnmatchedPolicy::Fail => {
                    return Err(BigvError::UnmatchedPerson {
                        person_id: entry.person_id.to_string(),
                    })
                }
                UnmatchedPolicy::Skip => {
                    tracing::warn!(person_id = %entry.person_id, "skipping entry for unknown person");
                    continue;
                }
            }
        };

        match teams.get(&entry.entity_id) {
            Some(team) => record.team = team.to_string(),
            None => {
                tracing::warn!(
                    person_id = %entry.person_id,
                    entity_id = %entry.entity_id,
                    "entry references unknown team, keeping previous team"
                );
            }
        }
        apply_statistics(record, entry)?;
    }

    Ok(players)
}

/// Copy every schema field the entry carries; names outside the schema are ignored.
fn apply_statistics(record: &mut PlayerRecord, entry: &StatisticEntry) -> Result<()> {
    for (key, raw) in &entry.statistics {
        let Some(field) = StatField::from_key(key) else {
            continue;
        };
        let value = StatValue::from_json(field, raw)?;
        record.stats.set(field, value);
    }
    Ok(())
}

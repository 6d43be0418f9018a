//! Player statistics command: fetch, normalize, export.
//!
//! Fetches the per-person season totals for one season (with persons and
//! entities side-loaded), flattens them into one schema-stable row per
//! player and writes a single-sheet workbook, or prints the rows as JSON.

use std::path::PathBuf;

use crate::{
    cli::types::SeasonId,
    error::BigvError,
    export::{default_output_path, ensure_xlsx_extension, xlsx::write_workbook},
    synergy::{http::SynergyClient, normalize_with, PlayerTable, UnmatchedPolicy},
    Result,
};

/// Configuration parameters for the player statistics command.
///
/// # Examples
///
/// ```rust
/// use bigv_stats::{commands::player_stats::PlayerStatsParams, SeasonId};
///
/// let params = PlayerStatsParams {
///     season_id: SeasonId::new("6b772c89-e1d4-11ef-adf4-c9b5f45cb025"),
///     limit: 500,
///     output: None,
///     as_json: false,
///     skip_unmatched: false,
/// };
/// assert!(params.output_path().ends_with("bigv-player-stats-6b772c89-e1d4-11ef-adf4-c9b5f45cb025.xlsx"));
/// ```
#[derive(Debug, Clone)]
pub struct PlayerStatsParams {
    pub season_id: SeasonId,
    pub limit: u32,
    pub output: Option<PathBuf>,
    pub as_json: bool,
    pub skip_unmatched: bool,
}

impl PlayerStatsParams {
    pub fn policy(&self) -> UnmatchedPolicy {
        if self.skip_unmatched {
            UnmatchedPolicy::Skip
        } else {
            UnmatchedPolicy::Fail
        }
    }

    /// Where the workbook goes: `--output` with an `.xlsx` extension, or the download folder.
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => ensure_xlsx_extension(path),
            None => default_output_path(&self.season_id),
        }
    }
}

/// Fetch and normalize, refusing an empty table.
pub async fn load_player_table(
    client: &SynergyClient,
    params: &PlayerStatsParams,
) -> Result<PlayerTable> {
    let value = client
        .get_person_statistics(&params.season_id, params.limit)
        .await?;

    let table = normalize_with(&value, params.policy())?;
    if table.is_empty() {
        return Err(BigvError::EmptyResult);
    }

    tracing::info!(season = %params.season_id, players = table.len(), "player table built");
    Ok(table)
}

/// Pretty JSON object keyed by person id, in table order.
pub fn render_table_json(table: &PlayerTable) -> Result<String> {
    Ok(serde_json::to_string_pretty(table)?)
}

/// Handle the player-stats command. Returns the number of players emitted.
pub async fn handle_player_stats(
    client: &SynergyClient,
    params: PlayerStatsParams,
) -> Result<usize> {
    eprintln!(
        "Fetching player statistics for season {}...",
        params.season_id
    );
    let table = load_player_table(client, &params).await?;

    if params.as_json {
        println!("{}", render_table_json(&table)?);
        return Ok(table.len());
    }

    let path = params.output_path();
    let report = write_workbook(&path, &table)?;
    println!(
        "✓ Wrote {} players to {}",
        report.players,
        report.path.display()
    );

    Ok(report.players)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{synergy::PlayerRecord, PersonId};

    #[test]
    fn test_json_output_keeps_person_ids() {
        let mut table = PlayerTable::new();
        table.insert(PersonId::new("P2"), PlayerRecord::new("Sam Lee", "1998-05-12"));
        table.insert(PersonId::new("P1"), PlayerRecord::new("Jo Smith", "2000-01-01"));

        let value: serde_json::Value =
            serde_json::from_str(&render_table_json(&table).unwrap()).unwrap();

        let object = value.as_object().unwrap();
        assert_eq!(object.keys().collect::<Vec<_>>(), vec!["P1", "P2"]);
        assert_eq!(value["P1"]["name"], "Jo Smith");
        assert_eq!(value["P2"]["dob"], "1998-05-12");
    }
}

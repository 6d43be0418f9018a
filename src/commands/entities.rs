//! Entities command implementation

use crate::{cli::types::SeasonId, synergy::http::SynergyClient, Result};

use super::common::render_raw_response;

/// Handle the entities command: fetch the teams of a season and print the raw JSON.
pub async fn handle_entities(client: &SynergyClient, season_id: &SeasonId, limit: u32) -> Result<()> {
    eprintln!("Fetching data from Basketball Victoria API...");
    let value = client.get_season_entities(season_id, limit).await?;
    eprintln!("✓ Request successful");

    println!("{}", render_raw_response(&value, "entities")?);
    Ok(())
}

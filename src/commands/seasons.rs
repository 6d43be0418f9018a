//! Seasons command implementation

use crate::{
    cli::types::{Competition, CompetitionId},
    synergy::http::SynergyClient,
    error::BigvError,
    Result,
};

use super::common::render_raw_response;

/// Pick the explicit id when given, otherwise the named competition's id.
pub fn resolve_competition_id(
    competition: Option<Competition>,
    competition_id: Option<CompetitionId>,
) -> Result<CompetitionId> {
    competition_id
        .or_else(|| competition.map(Competition::id))
        .ok_or(BigvError::MissingCompetition)
}

/// Handle the seasons command: fetch a competition's seasons and print the raw JSON.
pub async fn handle_seasons(
    client: &SynergyClient,
    competition: Option<Competition>,
    competition_id: Option<CompetitionId>,
    limit: u32,
) -> Result<()> {
    let competition_id = resolve_competition_id(competition, competition_id)?;

    eprintln!("Fetching seasons for competition {}...", competition_id);
    let value = client.get_seasons(&competition_id, limit).await?;
    eprintln!("✓ Request successful");

    println!("{}", render_raw_response(&value, "seasons")?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_id_wins() {
        let id =
            resolve_competition_id(Some(Competition::BigVMen), Some(CompetitionId::new("C9")))
                .unwrap();
        assert_eq!(id, CompetitionId::new("C9"));
    }

    #[test]
    fn test_falls_back_to_named_competition() {
        let id = resolve_competition_id(Some(Competition::BigVWomen), None).unwrap();
        assert_eq!(id, Competition::BigVWomen.id());
    }

    #[test]
    fn test_neither_given_is_usage_error() {
        let err = resolve_competition_id(None, None).unwrap_err();
        assert!(matches!(err, BigvError::MissingCompetition));
        assert_eq!(err.kind(), crate::error::ErrorKind::Usage);
    }
}

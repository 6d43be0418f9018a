//! CLI argument definitions and parsing structures.

use super::types::{Competition, CompetitionId, SeasonId};
use crate::synergy::http::DEFAULT_LIMIT;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Options shared by every subcommand.
#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// API base URL (or set `BIGV_API_BASE_URL`).
    #[clap(long, global = true)]
    pub base_url: Option<String>,

    /// Log request URLs and normalization details to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
#[clap(
    name = "bigv-stats",
    about = "Basketball Victoria statistics viewer and exporter"
)]
pub struct BigV {
    #[clap(flatten)]
    pub global: GlobalOpts,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the built-in competitions and their ids.
    Competitions,

    /// Fetch the seasons of a competition and print the raw JSON.
    Seasons {
        /// Named competition (built-in placeholder id).
        #[clap(long, short, value_enum, required_unless_present = "competition_id")]
        competition: Option<Competition>,

        /// Competition id, overriding `--competition`.
        #[clap(long)]
        competition_id: Option<CompetitionId>,

        /// Maximum records to request.
        #[clap(long, default_value_t = DEFAULT_LIMIT)]
        limit: u32,
    },

    /// Fetch the teams entered in a season and print the raw JSON.
    Entities {
        /// Season id.
        #[clap(long, short)]
        season_id: SeasonId,

        /// Maximum records to request.
        #[clap(long, default_value_t = DEFAULT_LIMIT)]
        limit: u32,
    },

    /// Fetch per-player season statistics and export them as a spreadsheet.
    ///
    /// Writes one sheet with a fixed header (name, team, dob, then every
    /// statistic column) and one row per player.
    PlayerStats {
        /// Season id.
        #[clap(long, short)]
        season_id: SeasonId,

        /// Output workbook path (defaults to the download folder).
        #[clap(long, short)]
        output: Option<PathBuf>,

        /// Print the normalized records as JSON instead of writing a workbook.
        #[clap(long)]
        json: bool,

        /// Drop statistic entries for unknown players instead of failing.
        #[clap(long)]
        skip_unmatched: bool,

        /// Maximum records to request.
        #[clap(long, default_value_t = DEFAULT_LIMIT)]
        limit: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        BigV::command().debug_assert();
    }

    #[test]
    fn test_parse_player_stats() {
        let app = BigV::try_parse_from([
            "bigv-stats",
            "player-stats",
            "--season-id",
            "S1",
            "-o",
            "out/stats",
            "--skip-unmatched",
            "--verbose",
        ])
        .unwrap();

        assert!(app.global.verbose);
        match app.command {
            Commands::PlayerStats {
                season_id,
                output,
                json,
                skip_unmatched,
                limit,
            } => {
                assert_eq!(season_id, SeasonId::new("S1"));
                assert_eq!(output, Some(PathBuf::from("out/stats")));
                assert!(!json);
                assert!(skip_unmatched);
                assert_eq!(limit, DEFAULT_LIMIT);
            }
            other => panic!("Expected PlayerStats, got {:?}", other),
        }
    }

    #[test]
    fn test_seasons_requires_a_competition() {
        let result = BigV::try_parse_from(["bigv-stats", "seasons"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_seasons_competition_id_only() {
        let app = BigV::try_parse_from(["bigv-stats", "seasons", "--competition-id", "C7"])
            .unwrap();
        match app.command {
            Commands::Seasons {
                competition,
                competition_id,
                limit,
            } => {
                assert!(competition.is_none());
                assert_eq!(competition_id, Some(CompetitionId::new("C7")));
                assert_eq!(limit, DEFAULT_LIMIT);
            }
            other => panic!("Expected Seasons, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_seasons_named_competition() {
        let app =
            BigV::try_parse_from(["bigv-stats", "seasons", "--competition", "big-v-women"])
                .unwrap();
        match app.command {
            Commands::Seasons { competition, .. } => {
                assert_eq!(competition, Some(Competition::BigVWomen))
            }
            other => panic!("Expected Seasons, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_season_id_rejected() {
        let result = BigV::try_parse_from(["bigv-stats", "entities", "--season-id", " "]);
        assert!(result.is_err());
    }

    #[test]
    fn test_base_url_flag_after_subcommand() {
        let app = BigV::try_parse_from([
            "bigv-stats",
            "entities",
            "-s",
            "S1",
            "--base-url",
            "http://localhost:8080/synergy",
        ])
        .unwrap();
        assert_eq!(
            app.global.base_url.as_deref(),
            Some("http://localhost:8080/synergy")
        );
    }
}

//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use anyhow::Context;
use bigv_stats::{
    cli::{BigV, Commands},
    commands::{
        competitions::handle_competitions,
        entities::handle_entities,
        player_stats::{handle_player_stats, PlayerStatsParams},
        resolve_base_url,
        seasons::handle_seasons,
    },
    synergy::http::SynergyClient,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default = if verbose {
        "bigv_stats=debug"
    } else {
        "bigv_stats=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(app: BigV) -> anyhow::Result<()> {
    let base_url = resolve_base_url(app.global.base_url);
    tracing::debug!(%base_url, "using API base URL");

    match app.command {
        Commands::Competitions => handle_competitions(),

        Commands::Seasons {
            competition,
            competition_id,
            limit,
        } => {
            let client = SynergyClient::with_base_url(base_url)?;
            handle_seasons(&client, competition, competition_id, limit)
                .await
                .context("fetching seasons")?
        }

        Commands::Entities { season_id, limit } => {
            let client = SynergyClient::with_base_url(base_url)?;
            handle_entities(&client, &season_id, limit)
                .await
                .context("fetching season entities")?
        }

        Commands::PlayerStats {
            season_id,
            output,
            json,
            skip_unmatched,
            limit,
        } => {
            let client = SynergyClient::with_base_url(base_url)?;
            handle_player_stats(
                &client,
                PlayerStatsParams {
                    season_id,
                    limit,
                    output,
                    as_json: json,
                    skip_unmatched,
                },
            )
            .await
            .context("exporting player statistics")?;
        }
    }

    Ok(())
}

/// Run the CLI.
#[tokio::main]
async fn main() {
    let app = BigV::parse();
    init_logging(app.global.verbose);

    if let Err(err) = run(app).await {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

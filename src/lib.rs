//! Basketball Victoria Statistics Library
//!
//! Fetches competition, season, team and player data from the Basketball
//! Victoria proxy of the Synergy statistics API, and reshapes per-player
//! season statistics into flat, schema-stable rows for spreadsheet export.
//!
//! ## Features
//!
//! - **Raw Viewer**: Fetch seasons or season teams and print the JSON as returned
//! - **Statistics Normalizer**: One record per player with a fixed set of statistic columns
//! - **Spreadsheet Export**: Single-sheet `.xlsx` workbook, one row per player
//!
//! ## Quick Start
//!
//! ```rust
//! use bigv_stats::{synergy::normalize, PersonId, StatField};
//! use serde_json::json;
//!
//! let response = json!({
//!     "data": [
//!         { "personId": "P1", "entityId": "T1", "statistics": { "points": 10, "assists": 3 } }
//!     ],
//!     "includes": { "resources": {
//!         "entities": { "T1": { "entityId": "T1", "nameFullLocal": "Tigers" } },
//!         "persons": { "P1": { "personId": "P1", "nameFullLocal": "Jo Smith", "dob": "2000-01-01" } }
//!     } }
//! });
//!
//! let table = normalize(&response)?;
//! let jo = &table[&PersonId::new("P1")];
//! assert_eq!(jo.team, "Tigers");
//! assert_eq!(jo.stats.get(StatField::Points).as_f64(), Some(10.0));
//! assert!(jo.stats.get(StatField::Steals).is_unknown());
//! # Ok::<(), bigv_stats::BigvError>(())
//! ```
//!
//! ## Environment Configuration
//!
//! Point the client at another proxy (for example a local mock):
//! ```bash
//! export BIGV_API_BASE_URL=http://localhost:8080/synergy
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod export;
pub mod synergy;

// Re-export commonly used types
pub use cli::types::{Competition, CompetitionId, EntityId, PersonId, SeasonId};
pub use error::{BigvError, ErrorKind, Result};
pub use synergy::{PlayerRecord, PlayerTable, StatField, StatValue};

pub const BASE_URL_ENV_VAR: &str = "BIGV_API_BASE_URL";

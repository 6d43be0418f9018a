//! Client, response types and player-table normalization for the Synergy statistics API.

pub mod http;
pub mod normalize;
pub mod schema;
pub mod types;

pub use normalize::{normalize, normalize_with, PlayerTable, UnmatchedPolicy};
pub use schema::{PlayerRecord, StatField, StatLine, StatValue, UNKNOWN};

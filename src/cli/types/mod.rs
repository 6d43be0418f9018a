//! Type-safe wrappers for Synergy identifiers and the competition lookup.

pub mod competition;
pub mod ids;

pub use competition::Competition;
pub use ids::{CompetitionId, EntityId, PersonId, SeasonId};

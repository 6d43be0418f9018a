//! ID types for Synergy resources.
//!
//! Synergy identifiers are opaque strings (usually UUIDs). They are never
//! parsed, only compared and echoed back into request routes.

use crate::error::{BigvError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

fn non_blank(s: &str) -> Result<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(BigvError::InvalidId {
            value: s.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// Type-safe wrapper for person (player) IDs.
///
/// # Examples
///
/// ```rust
/// use bigv_stats::PersonId;
///
/// let id = PersonId::new("5d1b0e0c-0000-11ef-a1b2-0242ac120002");
/// assert_eq!(id.as_str(), "5d1b0e0c-0000-11ef-a1b2-0242ac120002");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PersonId(pub String);

impl PersonId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PersonId {
    type Err = BigvError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(non_blank(s)?))
    }
}

/// Type-safe wrapper for entity (team) IDs
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntityId {
    type Err = BigvError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(non_blank(s)?))
    }
}

/// Type-safe wrapper for season IDs, used to build the statistics and entities routes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeasonId(pub String);

impl SeasonId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeasonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SeasonId {
    type Err = BigvError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(non_blank(s)?))
    }
}

/// Type-safe wrapper for competition IDs
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompetitionId(pub String);

impl CompetitionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompetitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CompetitionId {
    type Err = BigvError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(non_blank(s)?))
    }
}

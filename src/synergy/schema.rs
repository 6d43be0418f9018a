//! Fixed statistic schema for exported player rows.
//!
//! Every exported row carries exactly the fields listed in [`StatField::ALL`],
//! in that order, whatever subset the API happened to send for a player.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Number, Value};
use std::fmt;

use crate::error::{BigvError, Result};

/// Sentinel written for identity and statistic fields the API never supplied.
pub const UNKNOWN: &str = "unknown";

macro_rules! stat_fields {
    ($($variant:ident => $key:literal,)+) => {
        /// One column of the statistic schema, keyed by its Synergy field name.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum StatField {
            $($variant,)+
        }

        impl StatField {
            /// All fields in column order.
            pub const ALL: &'static [StatField] = &[$(StatField::$variant,)+];

            pub const COUNT: usize = Self::ALL.len();

            /// Synergy field name for this column.
            pub fn key(self) -> &'static str {
                match self {
                    $(StatField::$variant => $key,)+
                }
            }

            /// Map a Synergy field name onto its column; `None` for names outside the schema.
            pub fn from_key(key: &str) -> Option<Self> {
                match key {
                    $($key => Some(StatField::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

stat_fields! {
    Games => "games",
    GamesStarted => "gamesStarted",
    Minutes => "minutes",
    MinutesPerGame => "minutesPerGame",
    Points => "points",
    PointsPerGame => "pointsPerGame",
    PointsHighest => "pointsHighest",
    FieldGoalsMade => "fieldGoalsMade",
    FieldGoalsMadePerGame => "fieldGoalsMadePerGame",
    FieldGoalsAttempted => "fieldGoalsAttempted",
    FieldGoalsAttemptedPerGame => "fieldGoalsAttemptedPerGame",
    FieldGoalsPercentage => "fieldGoalsPercentage",
    TwoPointersMade => "twoPointersMade",
    TwoPointersMadePerGame => "twoPointersMadePerGame",
    TwoPointersAttempted => "twoPointersAttempted",
    TwoPointersAttemptedPerGame => "twoPointersAttemptedPerGame",
    TwoPointersPercentage => "twoPointersPercentage",
    ThreePointersMade => "threePointersMade",
    ThreePointersMadePerGame => "threePointersMadePerGame",
    ThreePointersAttempted => "threePointersAttempted",
    ThreePointersAttemptedPerGame => "threePointersAttemptedPerGame",
    ThreePointersPercentage => "threePointersPercentage",
    FreeThrowsMade => "freeThrowsMade",
    FreeThrowsMadePerGame => "freeThrowsMadePerGame",
    FreeThrowsAttempted => "freeThrowsAttempted",
    FreeThrowsAttemptedPerGame => "freeThrowsAttemptedPerGame",
    FreeThrowsPercentage => "freeThrowsPercentage",
    EffectiveFieldGoalPercentage => "effectiveFieldGoalPercentage",
    TrueShootingPercentage => "trueShootingPercentage",
    Rebounds => "rebounds",
    ReboundsPerGame => "reboundsPerGame",
    ReboundsOffensive => "reboundsOffensive",
    ReboundsOffensivePerGame => "reboundsOffensivePerGame",
    ReboundsDefensive => "reboundsDefensive",
    ReboundsDefensivePerGame => "reboundsDefensivePerGame",
    Assists => "assists",
    AssistsPerGame => "assistsPerGame",
    AssistsTurnoverRatio => "assistsTurnoverRatio",
    Steals => "steals",
    StealsPerGame => "stealsPerGame",
    Blocks => "blocks",
    BlocksPerGame => "blocksPerGame",
    BlocksReceived => "blocksReceived",
    BlocksReceivedPerGame => "blocksReceivedPerGame",
    Turnovers => "turnovers",
    TurnoversPerGame => "turnoversPerGame",
    FoulsPersonal => "foulsPersonal",
    FoulsPersonalPerGame => "foulsPersonalPerGame",
    FoulsTechnical => "foulsTechnical",
    FoulsUnsportsmanlike => "foulsUnsportsmanlike",
    FoulsDisqualifying => "foulsDisqualifying",
    FoulsOn => "foulsOn",
    FoulsOnPerGame => "foulsOnPerGame",
    PlusMinus => "plusMinus",
    PlusMinusPerGame => "plusMinusPerGame",
    Efficiency => "efficiency",
    EfficiencyPerGame => "efficiencyPerGame",
    PointsInThePaint => "pointsInThePaint",
    PointsInThePaintPerGame => "pointsInThePaintPerGame",
    PointsSecondChance => "pointsSecondChance",
    PointsSecondChancePerGame => "pointsSecondChancePerGame",
    PointsFastBreak => "pointsFastBreak",
    PointsFastBreakPerGame => "pointsFastBreakPerGame",
    PointsFromTurnovers => "pointsFromTurnovers",
    PointsFromTurnoversPerGame => "pointsFromTurnoversPerGame",
    DoubleDoubles => "doubleDoubles",
    TripleDoubles => "tripleDoubles",
    Dunks => "dunks",
    LayupsMade => "layupsMade",
    LayupsAttempted => "layupsAttempted",
    LayupsPercentage => "layupsPercentage",
    JumpShotsMade => "jumpShotsMade",
    JumpShotsAttempted => "jumpShotsAttempted",
    JumpShotsPercentage => "jumpShotsPercentage",
    HookShotsMade => "hookShotsMade",
    HookShotsAttempted => "hookShotsAttempted",
    TipInsMade => "tipInsMade",
    TipInsAttempted => "tipInsAttempted",
    AssistsRatio => "assistsRatio",
    TurnoverRatio => "turnoverRatio",
    UsagePercentage => "usagePercentage",
    ReboundsOffensivePercentage => "reboundsOffensivePercentage",
    ReboundsDefensivePercentage => "reboundsDefensivePercentage",
    ReboundsPercentage => "reboundsPercentage",
    AssistsPercentage => "assistsPercentage",
    StealsPercentage => "stealsPercentage",
    BlocksPercentage => "blocksPercentage",
    TurnoversPercentage => "turnoversPercentage",
    PointsPerShot => "pointsPerShot",
    Possessions => "possessions",
    OffensiveRating => "offensiveRating",
    DefensiveRating => "defensiveRating",
}

impl fmt::Display for StatField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Value held by one statistic slot.
#[derive(Debug, Clone, PartialEq)]
pub enum StatValue {
    /// Never supplied by the API.
    Unknown,
    /// Supplied as JSON `null`.
    Null,
    /// Supplied as a JSON number; kept as sent.
    Number(Number),
    /// Supplied as a string (clock-style minutes and the like); kept as sent.
    Text(String),
}

impl StatValue {
    /// Convert a raw statistic value. Booleans, arrays and objects are rejected.
    pub fn from_json(field: StatField, value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(StatValue::Null),
            Value::Number(n) => Ok(StatValue::Number(n.clone())),
            Value::String(s) => Ok(StatValue::Text(s.clone())),
            other => Err(BigvError::malformed(format!(
                "statistic `{}` has non-numeric value {}",
                field, other
            ))),
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, StatValue::Unknown)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StatValue::Number(n) => n.as_f64(),
            _ => None,
        }
    }
}

impl Serialize for StatValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            StatValue::Unknown => serializer.serialize_str(UNKNOWN),
            StatValue::Null => serializer.serialize_none(),
            StatValue::Number(n) => n.serialize(serializer),
            StatValue::Text(s) => serializer.serialize_str(s),
        }
    }
}

/// One value per [`StatField`], all starting out as [`StatValue::Unknown`].
#[derive(Debug, Clone, PartialEq)]
pub struct StatLine {
    values: [StatValue; StatField::COUNT],
}

impl StatLine {
    pub fn new() -> Self {
        Self {
            values: std::array::from_fn(|_| StatValue::Unknown),
        }
    }

    pub fn get(&self, field: StatField) -> &StatValue {
        &self.values[field as usize]
    }

    pub fn set(&mut self, field: StatField, value: StatValue) {
        self.values[field as usize] = value;
    }

    /// Fields paired with their values, in column order.
    pub fn iter(&self) -> impl Iterator<Item = (StatField, &StatValue)> + '_ {
        StatField::ALL.iter().copied().zip(self.values.iter())
    }

    /// Number of slots that hold something other than the sentinel.
    pub fn known_count(&self) -> usize {
        self.values.iter().filter(|v| !v.is_unknown()).count()
    }
}

impl Default for StatLine {
    fn default() -> Self {
        Self::new()
    }
}

/// Flattened, schema-stable output row for one player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    pub name: String,
    pub team: String,
    pub dob: String,
    pub stats: StatLine,
}

impl PlayerRecord {
    /// Identity columns that precede the statistic columns.
    pub const IDENTITY_COLUMNS: [&'static str; 3] = ["name", "team", "dob"];

    /// New record with `team` and every statistic set to the sentinel.
    pub fn new(name: impl Into<String>, dob: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            team: UNKNOWN.to_string(),
            dob: dob.into(),
            stats: StatLine::new(),
        }
    }

    /// Header row: identity columns followed by every statistic key.
    pub fn columns() -> Vec<&'static str> {
        Self::IDENTITY_COLUMNS
            .iter()
            .copied()
            .chain(StatField::ALL.iter().map(|f| f.key()))
            .collect()
    }
}

impl Serialize for PlayerRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3 + StatField::COUNT))?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("team", &self.team)?;
        map.serialize_entry("dob", &self.dob)?;
        for (field, value) in self.stats.iter() {
            map.serialize_entry(field.key(), value)?;
        }
        map.end()
    }
}

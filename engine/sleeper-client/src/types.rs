//! Sleeper wire types
//!
//! Only the fields the dashboard reads are modelled; everything else in the
//! responses is ignored.

use serde::{Deserialize, Serialize};

/// Member of a league (`GET /league/{id}/users`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleeperUser {
    pub user_id: String,
    pub display_name: String,
}

/// Roster record (`GET /league/{id}/rosters`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleeperRoster {
    /// Null for orphaned rosters
    #[serde(default)]
    pub owner_id: Option<String>,
    pub settings: RosterSettings,
}

/// Season performance counters of a roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterSettings {
    pub wins: u32,
    pub losses: u32,
    /// Whole points scored
    pub fpts: i64,
    /// Hundredths of a point, 0-99
    pub fpts_decimal: i64,
    /// Maximum points under optimal lineups
    #[serde(default)]
    pub ppts: Option<f64>,
}

impl RosterSettings {
    /// Points-for in hundredths, combining the whole and fractional fields
    pub fn points_for_hundredths(&self) -> i64 {
        self.fpts * 100 + self.fpts_decimal
    }
}

/// Entry of the bulk player catalog (`GET /players/nfl`), keyed by player id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SleeperPlayer {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl SleeperPlayer {
    /// `"First Last"`, or None when either half is missing
    pub fn full_name(&self) -> Option<String> {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            _ => None,
        }
    }
}

//! Per-map aggregates.

use serde::{Deserialize, Serialize};

/// Aggregate for one map, in the order the map was first seen in the
/// player's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapStat {
    /// Map name, e.g. "de_dust2"
    pub name: String,

    pub times_played: u32,

    /// Average match length in seconds
    pub average_duration_secs: f64,

    /// Average matchmaking wait in seconds
    pub average_wait_secs: f64,
}

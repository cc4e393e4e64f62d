//! Enumerated selector for the numeric per-game fields.
//!
//! Statistics are requested by field; the selector maps each variant to an
//! accessor so no string-keyed lookup ever happens.

use serde::{Deserialize, Serialize};

use super::PlayerGame;

/// A numeric per-game statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatField {
    Kills,
    Deaths,
    Assists,
    HeadshotPercent,
    Mvps,
    Score,
    Ping,
    WaitTime,
    MatchDuration,
}

impl StatField {
    /// Every field, in the order profiles report them.
    pub const ALL: [StatField; 9] = [
        StatField::Kills,
        StatField::Deaths,
        StatField::Assists,
        StatField::HeadshotPercent,
        StatField::Mvps,
        StatField::Score,
        StatField::Ping,
        StatField::WaitTime,
        StatField::MatchDuration,
    ];

    /// Value of this field in one of the player's games.
    pub fn of(&self, game: &PlayerGame) -> f64 {
        match self {
            StatField::Kills => game.stats.kills as f64,
            StatField::Deaths => game.stats.deaths as f64,
            StatField::Assists => game.stats.assists as f64,
            StatField::HeadshotPercent => game.stats.headshot_percent,
            StatField::Mvps => game.stats.mvps as f64,
            StatField::Score => game.stats.score as f64,
            StatField::Ping => game.stats.ping as f64,
            StatField::WaitTime => game.wait_secs as f64,
            StatField::MatchDuration => game.duration_secs as f64,
        }
    }
}

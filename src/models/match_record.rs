//! Match and per-player stat line models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{MatchId, PlayerId};

/// The side a player was on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    #[serde(rename = "CT")]
    Ct,
    #[serde(rename = "T")]
    T,
}

/// Which side won the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    #[serde(rename = "CT")]
    Ct,
    #[serde(rename = "T")]
    T,
    #[serde(rename = "TIE")]
    Tie,
}

/// Outcome of a match from one player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
    Tied,
}

impl Winner {
    /// Outcome for a player that played on `side`.
    pub fn outcome_for(&self, side: Side) -> Outcome {
        match (self, side) {
            (Winner::Tie, _) => Outcome::Tied,
            (Winner::Ct, Side::Ct) | (Winner::T, Side::T) => Outcome::Won,
            _ => Outcome::Lost,
        }
    }
}

/// One player's performance in one match.
///
/// Composite key: `player_id` + `match_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerMatchStatLine {
    pub player_id: PlayerId,
    pub match_id: MatchId,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    /// Headshot percentage, 0-100
    pub headshot_percent: f64,
    pub mvps: u32,
    pub score: u32,
    pub ping: u32,
    pub side: Side,
}

/// A completed match. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: MatchId,
    pub date: DateTime<Utc>,
    pub map: String,

    /// Match length in seconds
    pub duration_secs: u32,

    /// Matchmaking wait in seconds
    pub wait_secs: u32,

    pub ct_rounds: u32,
    pub t_rounds: u32,
    pub winner: Winner,

    /// Stat lines for every player in the match, in lobby order
    pub players: Vec<PlayerMatchStatLine>,
}

impl MatchRecord {
    /// The stat line of `player_id` in this match, if they played.
    pub fn stat_line(&self, player_id: &PlayerId) -> Option<&PlayerMatchStatLine> {
        self.players.iter().find(|p| &p.player_id == player_id)
    }
}

/// One player's view of one match: the match metadata joined with that
/// player's stat line. This is the row shape the store returns for a
/// player's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerGame {
    pub match_id: MatchId,
    pub date: DateTime<Utc>,
    pub map: String,
    pub duration_secs: u32,
    pub wait_secs: u32,
    pub ct_rounds: u32,
    pub t_rounds: u32,
    pub winner: Winner,
    pub stats: PlayerMatchStatLine,
}

impl PlayerGame {
    /// Join a match record with the subject's stat line.
    ///
    /// Returns `None` if the player did not play in the match.
    pub fn from_match(record: &MatchRecord, player_id: &PlayerId) -> Option<Self> {
        let stats = record.stat_line(player_id)?.clone();
        Some(Self {
            match_id: record.id,
            date: record.date,
            map: record.map.clone(),
            duration_secs: record.duration_secs,
            wait_secs: record.wait_secs,
            ct_rounds: record.ct_rounds,
            t_rounds: record.t_rounds,
            winner: record.winner,
            stats,
        })
    }

    /// Outcome of this game for the subject player.
    pub fn outcome(&self) -> Outcome {
        self.winner.outcome_for(self.stats.side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn stat_line(player: &str, match_id: u64, side: Side) -> PlayerMatchStatLine {
        PlayerMatchStatLine {
            player_id: PlayerId::from(player),
            match_id: MatchId::new(match_id),
            kills: 20,
            deaths: 15,
            assists: 4,
            headshot_percent: 45.0,
            mvps: 3,
            score: 50,
            ping: 25,
            side,
        }
    }

    fn sample_match() -> MatchRecord {
        MatchRecord {
            id: MatchId::new(1),
            date: Utc.with_ymd_and_hms(2021, 3, 14, 18, 30, 0).unwrap(),
            map: "de_dust2".to_string(),
            duration_secs: 2400,
            wait_secs: 90,
            ct_rounds: 16,
            t_rounds: 9,
            winner: Winner::Ct,
            players: vec![stat_line("p1", 1, Side::Ct), stat_line("p2", 1, Side::T)],
        }
    }

    #[test]
    fn test_outcome_for_winner_side() {
        assert_eq!(Winner::Ct.outcome_for(Side::Ct), Outcome::Won);
        assert_eq!(Winner::Ct.outcome_for(Side::T), Outcome::Lost);
        assert_eq!(Winner::T.outcome_for(Side::T), Outcome::Won);
        assert_eq!(Winner::T.outcome_for(Side::Ct), Outcome::Lost);
    }

    #[test]
    fn test_tie_short_circuits_outcome() {
        assert_eq!(Winner::Tie.outcome_for(Side::Ct), Outcome::Tied);
        assert_eq!(Winner::Tie.outcome_for(Side::T), Outcome::Tied);
    }

    #[test]
    fn test_side_serde_representation() {
        assert_eq!(serde_json::to_string(&Side::Ct).unwrap(), "\"CT\"");
        assert_eq!(serde_json::to_string(&Side::T).unwrap(), "\"T\"");
        assert_eq!(serde_json::to_string(&Winner::Tie).unwrap(), "\"TIE\"");

        let side: Side = serde_json::from_str("\"CT\"").unwrap();
        assert_eq!(side, Side::Ct);
    }

    #[test]
    fn test_match_stat_line_lookup() {
        let record = sample_match();

        let line = record.stat_line(&PlayerId::from("p2")).unwrap();
        assert_eq!(line.side, Side::T);
        assert!(record.stat_line(&PlayerId::from("p3")).is_none());
    }

    #[test]
    fn test_player_game_from_match() {
        let record = sample_match();

        let game = PlayerGame::from_match(&record, &PlayerId::from("p1")).unwrap();
        assert_eq!(game.match_id, MatchId::new(1));
        assert_eq!(game.map, "de_dust2");
        assert_eq!(game.outcome(), Outcome::Won);

        let game = PlayerGame::from_match(&record, &PlayerId::from("p2")).unwrap();
        assert_eq!(game.outcome(), Outcome::Lost);

        assert!(PlayerGame::from_match(&record, &PlayerId::from("nobody")).is_none());
    }

    #[test]
    fn test_match_record_serialization() {
        let record = sample_match();
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MatchRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}

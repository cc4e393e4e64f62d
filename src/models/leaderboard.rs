//! Leaderboard entries.

use serde::{Deserialize, Serialize};

use super::{PlayerMatchStatLine, PlayerRecord};

/// One ranked row of the global leaderboard: a single-match stat line
/// denormalized with the player who produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub player: PlayerRecord,
    pub stats: PlayerMatchStatLine,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MatchId, PlayerId, Side};
    use url::Url;

    #[test]
    fn test_leaderboard_entry_serialization() {
        let entry = LeaderboardEntry {
            player: PlayerRecord::new(
                PlayerId::from("p1"),
                "Alice".to_string(),
                Url::parse("https://avatars.example.com/a.jpg").unwrap(),
                Url::parse("https://steamcommunity.com/id/alice").unwrap(),
            ),
            stats: PlayerMatchStatLine {
                player_id: PlayerId::from("p1"),
                match_id: MatchId::new(10),
                kills: 34,
                deaths: 12,
                assists: 5,
                headshot_percent: 55.9,
                mvps: 7,
                score: 92,
                ping: 19,
                side: Side::Ct,
            },
        };

        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: LeaderboardEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, deserialized);
    }
}

//! The cached, fully-aggregated player profile.

use serde::{Deserialize, Serialize};
use url::Url;

use super::{DayActivity, MapStat, MatchId, PlayerGame, PlayerId, PlayerRecord};

/// Population mean with dispersion for one stat field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatSummary {
    pub value: f64,
    pub standard_deviation: f64,
    pub standard_error: f64,
}

/// A personal best with provenance: the match it happened in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BestStat {
    pub value: f64,
    pub match_id: MatchId,
}

/// Per-field averages over a player's full match set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameAverages {
    pub kills: StatSummary,
    pub deaths: StatSummary,
    pub assists: StatSummary,
    pub headshot_percent: StatSummary,
    pub mvps: StatSummary,
    pub score: StatSummary,
    pub ping: StatSummary,
    pub wait_time: StatSummary,
    pub match_duration: StatSummary,
}

/// Per-field personal bests over a player's full match set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameHighs {
    pub kills: BestStat,
    pub deaths: BestStat,
    pub assists: BestStat,
    pub headshot_percent: BestStat,
    pub mvps: BestStat,
    pub score: BestStat,
    pub ping: BestStat,
    pub wait_time: BestStat,
    pub match_duration: BestStat,
}

/// A player's derived statistical profile.
///
/// Built lazily, cached whole, never patched. Rebuilt from scratch after
/// cache invalidation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub player: PlayerRecord,

    pub matches_played: u32,
    pub won: u32,
    pub lost: u32,
    pub tied: u32,

    pub averages: GameAverages,
    pub highest: GameHighs,

    /// Per-map aggregates, in discovery order
    pub map_stats: Vec<MapStat>,

    /// The contiguous ten-game run with the highest score sum.
    /// `None` when the player has fewer than ten games.
    pub best_ten_games: Option<Vec<PlayerGame>>,

    /// Dense day-by-day activity from first match to today
    pub calendar: Vec<DayActivity>,
}

/// A compact view of an already-built profile, for the warm-profiles
/// listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub id: PlayerId,
    pub name: String,
    pub avatar_url: Url,
    pub profile_url: Url,
    pub matches_played: u32,
}

impl From<&Profile> for ProfileSummary {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.player.id.clone(),
            name: profile.player.name.clone(),
            avatar_url: profile.player.avatar_url.clone(),
            profile_url: profile.player.profile_url.clone(),
            matches_played: profile.matches_played,
        }
    }
}

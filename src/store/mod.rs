//! External data store boundary.
//!
//! The persistence collaborator implements [`MatchStore`]; this crate only
//! reads through it. [`MemoryStore`] is the in-memory reference
//! implementation, used in tests and by embedders that keep the whole
//! data set resident.

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{LeaderboardEntry, MatchId, MatchRecord, PlayerGame, PlayerId, PlayerRecord};

/// Errors surfaced by a store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Read access to raw player and match records.
///
/// Contract notes:
/// - `player_games` returns the player's history in chronological order
///   (oldest first); streak and statistics computations depend on it.
/// - `player_match_ids` must be deterministic per run; the solo-queue
///   classification is cumulative over that order.
/// - `players_with_stats` retrieval order is the tiebreak order of the
///   leaderboard.
#[async_trait]
pub trait MatchStore: Send + Sync {
    /// Player identity by id, if known.
    async fn player(&self, id: &PlayerId) -> Result<Option<PlayerRecord>, StoreError>;

    /// Player identity by profile URL, if known.
    async fn player_by_profile_url(&self, url: &str) -> Result<Option<PlayerRecord>, StoreError>;

    /// Every known player.
    async fn players(&self) -> Result<Vec<PlayerRecord>, StoreError>;

    /// A full match record, with every stat line, if known.
    async fn match_record(&self, id: MatchId) -> Result<Option<MatchRecord>, StoreError>;

    /// One player's complete history, oldest first.
    async fn player_games(&self, id: &PlayerId) -> Result<Vec<PlayerGame>, StoreError>;

    /// Ids of every match the player appears in, oldest first.
    async fn player_match_ids(&self, id: &PlayerId) -> Result<Vec<MatchId>, StoreError>;

    /// Every stat line of every player joined with player identity, in
    /// retrieval order.
    async fn players_with_stats(&self) -> Result<Vec<LeaderboardEntry>, StoreError>;
}

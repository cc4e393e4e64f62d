//! In-memory store implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::{LeaderboardEntry, MatchId, MatchRecord, PlayerGame, PlayerId, PlayerRecord};

use super::{MatchStore, StoreError};

#[derive(Default)]
struct Inner {
    players: HashMap<PlayerId, PlayerRecord>,
    matches: HashMap<MatchId, MatchRecord>,
}

impl Inner {
    /// Matches sorted by date, ties by id, so every derived listing is
    /// deterministic per run.
    fn matches_in_order(&self) -> Vec<&MatchRecord> {
        let mut records: Vec<&MatchRecord> = self.matches.values().collect();
        records.sort_by_key(|m| (m.date, m.id));
        records
    }
}

/// A [`MatchStore`] backed by process memory.
///
/// Doubles as the test fixture store: tests insert players and matches,
/// then point a tracker at it.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a player record.
    pub async fn insert_player(&self, player: PlayerRecord) {
        let mut inner = self.inner.write().await;
        inner.players.insert(player.id.clone(), player);
    }

    /// Insert or replace a match record.
    pub async fn insert_match(&self, record: MatchRecord) {
        let mut inner = self.inner.write().await;
        debug!(match_id = %record.id, map = %record.map, "inserting match");
        inner.matches.insert(record.id, record);
    }
}

#[async_trait]
impl MatchStore for MemoryStore {
    async fn player(&self, id: &PlayerId) -> Result<Option<PlayerRecord>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.players.get(id).cloned())
    }

    async fn player_by_profile_url(&self, url: &str) -> Result<Option<PlayerRecord>, StoreError> {
        let wanted = url.trim_end_matches('/');
        let inner = self.inner.read().await;
        Ok(inner
            .players
            .values()
            .find(|p| p.profile_url.as_str().trim_end_matches('/') == wanted)
            .cloned())
    }

    async fn players(&self) -> Result<Vec<PlayerRecord>, StoreError> {
        let inner = self.inner.read().await;
        let mut players: Vec<PlayerRecord> = inner.players.values().cloned().collect();
        players.sort_by(|a, b| a.id.as_str().cmp(b.id.as_str()));
        Ok(players)
    }

    async fn match_record(&self, id: MatchId) -> Result<Option<MatchRecord>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.matches.get(&id).cloned())
    }

    async fn player_games(&self, id: &PlayerId) -> Result<Vec<PlayerGame>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .matches_in_order()
            .into_iter()
            .filter_map(|record| PlayerGame::from_match(record, id))
            .collect())
    }

    async fn player_match_ids(&self, id: &PlayerId) -> Result<Vec<MatchId>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .matches_in_order()
            .into_iter()
            .filter(|record| record.stat_line(id).is_some())
            .map(|record| record.id)
            .collect())
    }

    async fn players_with_stats(&self) -> Result<Vec<LeaderboardEntry>, StoreError> {
        let inner = self.inner.read().await;
        let mut entries = Vec::new();

        for record in inner.matches_in_order() {
            for line in &record.players {
                if let Some(player) = inner.players.get(&line.player_id) {
                    entries.push(LeaderboardEntry {
                        player: player.clone(),
                        stats: line.clone(),
                    });
                }
            }
        }

        Ok(entries)
    }
}

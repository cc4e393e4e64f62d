//! Process-wide memoization for derived statistics.
//!
//! One cache service object owns every cache: match records, per-player
//! map statistics, activity calendars, solo-queue sets, the global
//! leaderboard, and built profiles. Population is lazy; invalidation is
//! wholesale. There is no per-entry TTL and no partial eviction —
//! ingestion is rare relative to reads, so full recomputation is cheaper
//! than ever serving a stale aggregate.
//!
//! All six caches live behind a single `RwLock`, which makes invalidation
//! one write-lock critical section: readers either see the caches fully
//! populated as of before an ingest event, or fully cleared.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::models::{
    DayActivity, LeaderboardEntry, MapStat, MatchId, MatchRecord, PlayerId, Profile,
    ProfileSummary,
};

#[derive(Default)]
struct Caches {
    matches: HashMap<MatchId, MatchRecord>,
    map_stats: HashMap<PlayerId, Vec<MapStat>>,
    calendars: HashMap<PlayerId, Vec<DayActivity>>,
    solo_queue: HashMap<PlayerId, Vec<MatchId>>,
    leaderboard: Option<Vec<LeaderboardEntry>>,
    profiles: HashMap<PlayerId, Profile>,
}

/// The cache service. Constructed once and shared by every consumer.
#[derive(Default)]
pub struct StatCache {
    inner: RwLock<Caches>,
}

impl StatCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn match_record(&self, id: MatchId) -> Option<MatchRecord> {
        self.inner.read().await.matches.get(&id).cloned()
    }

    pub async fn store_match(&self, record: MatchRecord) {
        debug!(match_id = %record.id, "caching match");
        self.inner.write().await.matches.insert(record.id, record);
    }

    pub async fn map_stats(&self, player_id: &PlayerId) -> Option<Vec<MapStat>> {
        self.inner.read().await.map_stats.get(player_id).cloned()
    }

    pub async fn store_map_stats(&self, player_id: PlayerId, stats: Vec<MapStat>) {
        debug!(player = %player_id, maps = stats.len(), "caching map statistics");
        self.inner.write().await.map_stats.insert(player_id, stats);
    }

    pub async fn calendar(&self, player_id: &PlayerId) -> Option<Vec<DayActivity>> {
        self.inner.read().await.calendars.get(player_id).cloned()
    }

    pub async fn store_calendar(&self, player_id: PlayerId, calendar: Vec<DayActivity>) {
        debug!(player = %player_id, days = calendar.len(), "caching activity calendar");
        self.inner
            .write()
            .await
            .calendars
            .insert(player_id, calendar);
    }

    pub async fn solo_queue(&self, player_id: &PlayerId) -> Option<Vec<MatchId>> {
        self.inner.read().await.solo_queue.get(player_id).cloned()
    }

    pub async fn store_solo_queue(&self, player_id: PlayerId, matches: Vec<MatchId>) {
        debug!(player = %player_id, solo = matches.len(), "caching solo-queue set");
        self.inner
            .write()
            .await
            .solo_queue
            .insert(player_id, matches);
    }

    pub async fn leaderboard(&self) -> Option<Vec<LeaderboardEntry>> {
        self.inner.read().await.leaderboard.clone()
    }

    pub async fn store_leaderboard(&self, entries: Vec<LeaderboardEntry>) {
        debug!(entries = entries.len(), "caching leaderboard");
        self.inner.write().await.leaderboard = Some(entries);
    }

    pub async fn profile(&self, player_id: &PlayerId) -> Option<Profile> {
        self.inner.read().await.profiles.get(player_id).cloned()
    }

    pub async fn store_profile(&self, profile: Profile) {
        debug!(player = %profile.player.id, "caching profile");
        self.inner
            .write()
            .await
            .profiles
            .insert(profile.player.id.clone(), profile);
    }

    /// Summaries of the built profiles with the most matches, descending,
    /// capped at `limit`.
    pub async fn built_profiles(&self, limit: usize) -> Vec<ProfileSummary> {
        let inner = self.inner.read().await;
        let mut profiles: Vec<&Profile> = inner.profiles.values().collect();
        profiles.sort_by(|a, b| {
            b.matches_played
                .cmp(&a.matches_played)
                .then_with(|| a.player.id.as_str().cmp(b.player.id.as_str()))
        });
        profiles
            .into_iter()
            .take(limit)
            .map(ProfileSummary::from)
            .collect()
    }

    /// Discard every cache in one atomic step.
    ///
    /// Called when new match data arrives. Readers blocked on the write
    /// lock resume against empty caches and recompute lazily.
    pub async fn invalidate_all(&self) {
        let mut inner = self.inner.write().await;
        *inner = Caches::default();
        info!("invalidated all stat caches");
    }
}

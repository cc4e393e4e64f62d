//! The tracker facade.
//!
//! `MatchTracker` is the single entry point callers (bot commands, REST
//! routes) talk to. It owns the cache service, pulls raw records through
//! the store boundary on cache misses, runs the aggregation algorithms,
//! and memoizes the results. Data flows one way: store -> aggregation ->
//! cache -> caller; the only write-back is cache population.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, info};

use crate::cache::StatCache;
use crate::calculate::{self, StatsError};
use crate::config::TrackerConfig;
use crate::models::{
    BestStat, DayActivity, GameAverages, GameHighs, LeaderboardEntry, MapStat, MatchId,
    MatchRecord, Outcome, PlayerGame, PlayerId, PlayerRecord, Profile, ProfileSummary,
    StatField, StatSummary,
};
use crate::store::{MatchStore, StoreError};

/// Errors surfaced to callers of the tracker.
///
/// `PlayerNotFound`/`MatchNotFound` translate to user-facing "not found"
/// messages; everything else is a generic failure at the presentation
/// layer. Nothing here should ever crash the host process.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("player not found: {0}")]
    PlayerNotFound(String),

    #[error("match not found: {0}")]
    MatchNotFound(MatchId),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("insufficient data: need {required} games, have {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<StatsError> for TrackerError {
    fn from(err: StatsError) -> Self {
        match err {
            StatsError::EmptySample => {
                TrackerError::InvalidInput("empty statistical sample".to_string())
            }
            StatsError::InsufficientData { required, actual } => {
                TrackerError::InsufficientData { required, actual }
            }
            StatsError::InvalidDateRange { start, end } => {
                TrackerError::InvalidInput(format!("date range starts {start}, ends {end}"))
            }
        }
    }
}

/// Match-statistics aggregation and caching engine.
///
/// Constructed once and shared (`Arc`) across every consumer. All cached
/// state lives in the owned [`StatCache`]; `notify_new_match_data`
/// discards it wholesale.
pub struct MatchTracker {
    store: Arc<dyn MatchStore>,
    cache: StatCache,
    config: TrackerConfig,
}

impl MatchTracker {
    pub fn new(store: Arc<dyn MatchStore>) -> Self {
        Self::with_config(store, TrackerConfig::default())
    }

    pub fn with_config(store: Arc<dyn MatchStore>, config: TrackerConfig) -> Self {
        Self {
            store,
            cache: StatCache::new(),
            config,
        }
    }

    /// A player's full statistical profile, built on first request and
    /// cached until invalidation.
    pub async fn profile(&self, id: &PlayerId) -> Result<Profile, TrackerError> {
        if let Some(profile) = self.cache.profile(id).await {
            debug!(player = %id, "profile cache hit");
            return Ok(profile);
        }

        let profile = self.build_profile(id).await?;
        self.cache.store_profile(profile.clone()).await;
        Ok(profile)
    }

    /// Resolve a player by Steam profile URL and build their profile.
    /// A trailing `/` on the URL is tolerated.
    pub async fn profile_by_url(&self, url: &str) -> Result<Profile, TrackerError> {
        let url = url.trim_end_matches('/');
        let player = self
            .store
            .player_by_profile_url(url)
            .await?
            .ok_or_else(|| TrackerError::PlayerNotFound(url.to_string()))?;

        self.profile(&player.id).await
    }

    /// Bare player identity.
    pub async fn player(&self, id: &PlayerId) -> Result<PlayerRecord, TrackerError> {
        self.store
            .player(id)
            .await?
            .ok_or_else(|| TrackerError::PlayerNotFound(id.to_string()))
    }

    /// Case-insensitive prefix search over player names, ordered
    /// lexicographically (case-insensitive). Prefixes shorter than the
    /// configured minimum return nothing.
    pub async fn search(&self, name_prefix: &str) -> Result<Vec<PlayerRecord>, TrackerError> {
        if name_prefix.chars().count() < self.config.search_min_chars {
            return Ok(Vec::new());
        }

        let needle = name_prefix.to_lowercase();
        let mut hits: Vec<PlayerRecord> = self
            .store
            .players()
            .await?
            .into_iter()
            .filter(|p| p.name.to_lowercase().starts_with(&needle))
            .collect();
        hits.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

        Ok(hits)
    }

    /// A full match record, cached by id.
    pub async fn match_record(&self, id: MatchId) -> Result<MatchRecord, TrackerError> {
        if let Some(record) = self.cache.match_record(id).await {
            debug!(match_id = %id, "match cache hit");
            return Ok(record);
        }

        let record = self
            .store
            .match_record(id)
            .await?
            .ok_or(TrackerError::MatchNotFound(id))?;
        self.cache.store_match(record.clone()).await;
        Ok(record)
    }

    /// The global leaderboard: top stat lines by score, descending.
    /// Ties keep the store's retrieval order; the sort is stable.
    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, TrackerError> {
        if let Some(entries) = self.cache.leaderboard().await {
            debug!("leaderboard cache hit");
            return Ok(entries);
        }

        let mut rows = self.store.players_with_stats().await?;
        rows.sort_by(|a, b| b.stats.score.cmp(&a.stats.score));
        rows.truncate(self.config.leaderboard_size);

        self.cache.store_leaderboard(rows.clone()).await;
        Ok(rows)
    }

    /// One numeric field of a player's history, most recent game first,
    /// optionally restricted to their solo-queue matches.
    pub async fn player_statistics(
        &self,
        id: &PlayerId,
        field: StatField,
        solo_queue_only: bool,
    ) -> Result<Vec<f64>, TrackerError> {
        let mut games = self.store.player_games(id).await?;

        if solo_queue_only {
            let solo: HashSet<MatchId> = self.solo_queue_matches(id).await?.into_iter().collect();
            games.retain(|g| solo.contains(&g.match_id));
        }

        // Store order is oldest-first
        games.reverse();
        Ok(games.iter().map(|g| field.of(g)).collect())
    }

    /// The ids of the player's solo-queue matches, cached per player.
    pub async fn solo_queue_matches(&self, id: &PlayerId) -> Result<Vec<MatchId>, TrackerError> {
        if let Some(matches) = self.cache.solo_queue(id).await {
            debug!(player = %id, "solo-queue cache hit");
            return Ok(matches);
        }

        let match_ids = self.store.player_match_ids(id).await?;
        let mut records = Vec::with_capacity(match_ids.len());
        for match_id in match_ids {
            records.push(self.match_record(match_id).await?);
        }

        let solo = calculate::solo_queue_matches(id, &records);
        self.cache.store_solo_queue(id.clone(), solo.clone()).await;
        Ok(solo)
    }

    /// Per-map aggregates for a player, cached per player.
    pub async fn map_statistics(&self, id: &PlayerId) -> Result<Vec<MapStat>, TrackerError> {
        if let Some(stats) = self.cache.map_stats(id).await {
            debug!(player = %id, "map statistics cache hit");
            return Ok(stats);
        }

        let games = self.store.player_games(id).await?;
        let stats = map_stats_from_games(&games);
        self.cache.store_map_stats(id.clone(), stats.clone()).await;
        Ok(stats)
    }

    /// Dense day-by-day match counts from the player's first match until
    /// today, cached per player.
    pub async fn match_frequency(&self, id: &PlayerId) -> Result<Vec<DayActivity>, TrackerError> {
        if let Some(calendar) = self.cache.calendar(id).await {
            debug!(player = %id, "calendar cache hit");
            return Ok(calendar);
        }

        let games = self.store.player_games(id).await?;
        let dates: Vec<_> = games.iter().map(|g| g.date).collect();
        let calendar = calculate::daily_activity(&dates, Utc::now().date_naive())?;

        self.cache
            .store_calendar(id.clone(), calendar.clone())
            .await;
        Ok(calendar)
    }

    /// One page of a player's match history, oldest first. Pages are
    /// zero-based with the configured page size.
    pub async fn player_matches(
        &self,
        id: &PlayerId,
        page: usize,
    ) -> Result<Vec<PlayerGame>, TrackerError> {
        let games = self.store.player_games(id).await?;
        Ok(games
            .into_iter()
            .skip(page * self.config.page_size)
            .take(self.config.page_size)
            .collect())
    }

    /// Summaries of the already-built profiles with the most matches.
    pub async fn built_profiles(&self) -> Vec<ProfileSummary> {
        self.cache
            .built_profiles(self.config.built_profiles_limit)
            .await
    }

    /// Ingestion hook: new match data was accepted upstream, so every
    /// derived aggregate is stale. Discards all caches atomically;
    /// subsequent reads recompute lazily.
    pub async fn notify_new_match_data(&self) {
        info!("new match data accepted, invalidating caches");
        self.cache.invalidate_all().await;
    }

    async fn build_profile(&self, id: &PlayerId) -> Result<Profile, TrackerError> {
        let player = self
            .store
            .player(id)
            .await?
            .ok_or_else(|| TrackerError::PlayerNotFound(id.to_string()))?;

        let games = self.store.player_games(id).await?;
        if games.is_empty() {
            return Err(TrackerError::InvalidInput(format!(
                "player {id} has no recorded matches"
            )));
        }

        info!(player = %id, games = games.len(), "building profile");

        let mut won = 0;
        let mut lost = 0;
        let mut tied = 0;
        for game in &games {
            match game.outcome() {
                Outcome::Won => won += 1,
                Outcome::Lost => lost += 1,
                Outcome::Tied => tied += 1,
            }
        }

        let averages = GameAverages {
            kills: field_summary(&games, StatField::Kills)?,
            deaths: field_summary(&games, StatField::Deaths)?,
            assists: field_summary(&games, StatField::Assists)?,
            headshot_percent: field_summary(&games, StatField::HeadshotPercent)?,
            mvps: field_summary(&games, StatField::Mvps)?,
            score: field_summary(&games, StatField::Score)?,
            ping: field_summary(&games, StatField::Ping)?,
            wait_time: field_summary(&games, StatField::WaitTime)?,
            match_duration: field_summary(&games, StatField::MatchDuration)?,
        };

        let highest = GameHighs {
            kills: field_best(&games, StatField::Kills)?,
            deaths: field_best(&games, StatField::Deaths)?,
            assists: field_best(&games, StatField::Assists)?,
            headshot_percent: field_best(&games, StatField::HeadshotPercent)?,
            mvps: field_best(&games, StatField::Mvps)?,
            score: field_best(&games, StatField::Score)?,
            ping: field_best(&games, StatField::Ping)?,
            wait_time: field_best(&games, StatField::WaitTime)?,
            match_duration: field_best(&games, StatField::MatchDuration)?,
        };

        let best_ten_games = match calculate::best_score_window(&games, self.config.streak_window)
        {
            Ok(window) => Some(window.to_vec()),
            Err(StatsError::InsufficientData { .. }) => None,
            Err(err) => return Err(err.into()),
        };

        let map_stats = self.map_statistics(id).await?;
        let calendar = self.match_frequency(id).await?;

        Ok(Profile {
            player,
            matches_played: games.len() as u32,
            won,
            lost,
            tied,
            averages,
            highest,
            map_stats,
            best_ten_games,
            calendar,
        })
    }
}

fn field_summary(games: &[PlayerGame], field: StatField) -> Result<StatSummary, StatsError> {
    let samples: Vec<f64> = games.iter().map(|g| field.of(g)).collect();
    let dispersion = calculate::dispersion(&samples)?;

    Ok(StatSummary {
        value: dispersion.mean,
        standard_deviation: dispersion.standard_deviation,
        standard_error: dispersion.standard_error,
    })
}

fn field_best(games: &[PlayerGame], field: StatField) -> Result<BestStat, StatsError> {
    let (value, match_id) = calculate::highest(games.iter().map(|g| (field.of(g), g.match_id)))?;
    Ok(BestStat { value, match_id })
}

/// Per-map aggregates in discovery order: running totals per map, divided
/// by the play count at the end.
fn map_stats_from_games(games: &[PlayerGame]) -> Vec<MapStat> {
    struct Accum {
        name: String,
        times: u32,
        duration_secs: u64,
        wait_secs: u64,
    }

    let mut accums: Vec<Accum> = Vec::new();
    for game in games {
        match accums.iter_mut().find(|a| a.name == game.map) {
            Some(accum) => {
                accum.times += 1;
                accum.duration_secs += game.duration_secs as u64;
                accum.wait_secs += game.wait_secs as u64;
            }
            None => accums.push(Accum {
                name: game.map.clone(),
                times: 1,
                duration_secs: game.duration_secs as u64,
                wait_secs: game.wait_secs as u64,
            }),
        }
    }

    accums
        .into_iter()
        .map(|a| MapStat {
            name: a.name,
            times_played: a.times,
            average_duration_secs: a.duration_secs as f64 / a.times as f64,
            average_wait_secs: a.wait_secs as f64 / a.times as f64,
        })
        .collect()
}

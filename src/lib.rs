//! # Matchboard
//!
//! Match-statistics aggregation and caching engine for a CSGO stat
//! tracker.
//!
//! Raw per-match, per-player records come in through the [`store`]
//! boundary; this crate turns them into durable player profiles, derived
//! statistics, activity calendars, solo-queue classifications, and a
//! global leaderboard, all served from process-wide caches that are
//! invalidated wholesale when new match data arrives.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (players, matches, stat lines,
//!   profiles, leaderboard entries)
//! - **calculate**: Pure aggregation algorithms (population statistics,
//!   streak window, solo-queue classification, activity calendars)
//! - **store**: The external data store boundary and an in-memory
//!   implementation
//! - **cache**: The cache service (lazy population, wholesale
//!   invalidation)
//! - **tracker**: The facade callers talk to
//! - **config**: Configuration loading and validation
//!
//! ## Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use matchboard::store::MemoryStore;
//! use matchboard::tracker::MatchTracker;
//!
//! # async fn run() -> Result<(), matchboard::tracker::TrackerError> {
//! let store = Arc::new(MemoryStore::new());
//! let tracker = MatchTracker::new(store);
//!
//! let players = tracker.search("al").await?;
//! for player in players {
//!     let profile = tracker.profile(&player.id).await?;
//!     println!("{}: {} matches", profile.player.name, profile.matches_played);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod calculate;
pub mod config;
pub mod models;
pub mod store;
pub mod tracker;

pub use models::*;
pub use tracker::{MatchTracker, TrackerError};

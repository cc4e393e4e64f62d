//! Statistics calculation engine.
//!
//! Pure, synchronous aggregation over a player's match history:
//! - Population mean / standard deviation / standard error
//! - Personal bests with match provenance
//! - Best fixed-length score streak
//! - Cumulative solo-queue classification
//! - Dense day-by-day activity calendars
//!
//! Nothing here touches the store or the caches; callers feed data in and
//! cache results themselves.

mod aggregate;
mod calendar;
mod solo_queue;
mod streak;

pub use aggregate::*;
pub use calendar::*;
pub use solo_queue::*;
pub use streak::*;

use chrono::NaiveDate;
use thiserror::Error;

/// Errors from the pure aggregation layer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    /// Statistics over an empty sample would divide by zero. The caller
    /// must guard before invoking; a `NaN` must never reach a cache.
    #[error("empty sample: statistics require at least one value")]
    EmptySample,

    #[error("insufficient data: need {required} games, have {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("invalid date range: first match day {start} is after {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}

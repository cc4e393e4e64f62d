//! Best fixed-length score streak.

use crate::models::PlayerGame;

use super::StatsError;

/// The contiguous run of exactly `window` games with the maximum score
/// sum, over a chronologically ordered history.
///
/// Maintains a sliding window with a running sum; the first full window
/// becomes the initial best and is replaced only on strict improvement,
/// so among equal-sum windows the earliest wins.
///
/// Fewer than `window` games is an explicit `InsufficientData` error, not
/// a silent empty result.
pub fn best_score_window(games: &[PlayerGame], window: usize) -> Result<&[PlayerGame], StatsError> {
    if window == 0 {
        return Err(StatsError::EmptySample);
    }
    if games.len() < window {
        return Err(StatsError::InsufficientData {
            required: window,
            actual: games.len(),
        });
    }

    let mut sum: u64 = games[..window].iter().map(|g| g.stats.score as u64).sum();
    let mut best_sum = sum;
    let mut best_start = 0;

    for i in window..games.len() {
        sum -= games[i - window].stats.score as u64;
        sum += games[i].stats.score as u64;

        if sum > best_sum {
            best_sum = sum;
            best_start = i - window + 1;
        }
    }

    Ok(&games[best_start..best_start + window])
}

//! Cumulative solo-queue classification.

use std::collections::HashSet;

use crate::models::{MatchId, MatchRecord, PlayerId};

/// Classify each of the subject's matches as solo-queue or not, returning
/// the ids of the solo matches.
///
/// The classification is cumulative across the whole history, in the
/// order the matches are given: a running set holds every player already
/// seen paired with the subject. A match is solo only if none of its
/// co-players is in that set; only then are its co-players added. This is
/// deliberately order-dependent — a per-match independent check would
/// classify differently and break downstream solo-only filters.
pub fn solo_queue_matches(subject: &PlayerId, matches: &[MatchRecord]) -> Vec<MatchId> {
    let mut seen: HashSet<PlayerId> = HashSet::new();
    let mut solo = Vec::new();

    for record in matches {
        let co_players: Vec<&PlayerId> = record
            .players
            .iter()
            .map(|line| &line.player_id)
            .filter(|id| *id != subject)
            .collect();

        if co_players.iter().any(|id| seen.contains(*id)) {
            continue;
        }

        for id in co_players {
            seen.insert(id.clone());
        }
        solo.push(record.id);
    }

    solo
}

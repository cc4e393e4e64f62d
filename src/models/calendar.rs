//! Activity calendar entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Match count for one calendar day.
///
/// Calendars are dense: every day between a player's first match and
/// "today" is present, zero-match days included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayActivity {
    pub day: NaiveDate,
    pub matches: u32,
}

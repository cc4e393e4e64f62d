//! Dense activity calendar reconstruction.

use std::collections::HashMap;

use chrono::{DateTime, Days, NaiveDate, Utc};

use crate::models::DayActivity;

use super::StatsError;

/// Build the dense day-by-day activity series from the earliest match day
/// through `today`, inclusive.
///
/// Match timestamps collapse onto calendar days (year/month/day, not raw
/// timestamp equality); several matches on one day accumulate, and days
/// without matches stay at zero. The input order does not matter.
pub fn daily_activity(
    dates: &[DateTime<Utc>],
    today: NaiveDate,
) -> Result<Vec<DayActivity>, StatsError> {
    if dates.is_empty() {
        return Err(StatsError::EmptySample);
    }

    let mut per_day: HashMap<NaiveDate, u32> = HashMap::new();
    for date in dates {
        *per_day.entry(date.date_naive()).or_insert(0) += 1;
    }

    let start = match per_day.keys().min() {
        Some(day) => *day,
        None => return Err(StatsError::EmptySample),
    };
    if start > today {
        return Err(StatsError::InvalidDateRange { start, end: today });
    }

    let mut calendar = Vec::new();
    let mut day = start;
    loop {
        calendar.push(DayActivity {
            day,
            matches: per_day.get(&day).copied().unwrap_or(0),
        });

        if day == today {
            break;
        }
        day = day
            .checked_add_days(Days::new(1))
            .ok_or(StatsError::InvalidDateRange { start, end: today })?;
    }

    Ok(calendar)
}

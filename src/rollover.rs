use crate::models::Record;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayState {
    /// The record was last touched today.
    Current,
    /// The record is from another day, or has never been visited.
    Stale,
}

/// What a rollover did to a record, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RolloverOutcome {
    FirstVisit,
    SameDay,
    Archived { date: NaiveDate, count: u64 },
    Reset { date: NaiveDate },
}

pub fn day_state(record: &Record, today: NaiveDate) -> DayState {
    match record.last_visited_date {
        Some(date) if date == today => DayState::Current,
        _ => DayState::Stale,
    }
}

pub fn classify(record: &Record, today: NaiveDate) -> RolloverOutcome {
    match record.last_visited_date {
        None => RolloverOutcome::FirstVisit,
        Some(date) if date == today => RolloverOutcome::SameDay,
        Some(date) if record.count > 0 => RolloverOutcome::Archived {
            date,
            count: record.count,
        },
        Some(date) => RolloverOutcome::Reset { date },
    }
}

/// Moves a stale record to `today`, archiving the previous day's count.
///
/// Only equality with `today` is checked. A record dated after `today` (the
/// clock went backward) is archived under its own, later date and reset.
pub fn rollover(mut record: Record, today: NaiveDate) -> Record {
    match record.last_visited_date {
        Some(date) if date == today => return record,
        Some(date) => {
            if record.count > 0 {
                record.history.insert(date, record.count);
            }
            record.count = 0;
        }
        None => {}
    }
    record.last_visited_date = Some(today);
    record
}

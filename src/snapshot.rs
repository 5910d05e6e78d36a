use crate::models::{HistoryEntry, Record, Snapshot};
use chrono::NaiveDate;

/// Dated by the day the count belongs to; `today` only covers a record
/// that has never been visited.
pub fn build_snapshot(record: &Record, today: NaiveDate) -> Snapshot {
    let day = record.last_visited_date.unwrap_or(today);
    let remaining = (record.target > 0).then(|| remaining_to_goal(record.target, record.count));

    Snapshot {
        date: date_key(day),
        display_date: day.format("%B %-d, %Y").to_string(),
        count: record.count,
        target: record.target,
        remaining,
        goal_reached: record.target > 0 && record.count >= record.target,
        can_decrement: record.count > 0,
        history: history_entries(record),
    }
}

/// Archived days, most recent first.
pub fn history_entries(record: &Record) -> Vec<HistoryEntry> {
    record
        .history
        .iter()
        .rev()
        .map(|(date, count)| HistoryEntry {
            date: date_key(*date),
            label: date.format("%b %-d, %Y").to_string(),
            count: *count,
        })
        .collect()
}

/// `target - count`, saturated into `i64`.
fn remaining_to_goal(target: u64, count: u64) -> i64 {
    let left = i128::from(target) - i128::from(count);
    i64::try_from(left).unwrap_or(if left < 0 { i64::MIN } else { i64::MAX })
}

fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

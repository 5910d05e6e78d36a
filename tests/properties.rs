//! Property tests for the rollover engine and counter operations.

use chrono::{Duration, NaiveDate};
use daily_target::counter::{decrement, increment, set_target};
use daily_target::rollover::{day_state, rollover, DayState};
use daily_target::snapshot::build_snapshot;
use daily_target::Record;
use proptest::prelude::*;
use std::collections::BTreeMap;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

prop_compose! {
    fn arbitrary_date()(offset in 0i64..2000) -> NaiveDate {
        base_date() + Duration::days(offset)
    }
}

prop_compose! {
    fn arbitrary_record()(
        count in prop_oneof![0u64..1000, any::<u64>()],
        target in prop_oneof![0u64..100, any::<u64>()],
        last in proptest::option::of(arbitrary_date()),
        history in proptest::collection::btree_map(arbitrary_date(), 1u64..500, 0..10),
    ) -> Record {
        Record {
            count,
            target,
            last_visited_date: last,
            history,
        }
    }
}

proptest! {
    #[test]
    fn decrement_never_goes_below_zero(start in 0u64..20, steps in 0usize..60) {
        let mut record = Record { count: start, ..Record::default() };
        for _ in 0..steps {
            decrement(&mut record);
        }
        prop_assert_eq!(record.count, start.saturating_sub(steps as u64));
    }

    #[test]
    fn increments_then_decrements_return_to_start(start in 0u64..50, steps in 0u64..50) {
        let mut record = Record { count: start, ..Record::default() };
        for _ in 0..steps {
            increment(&mut record);
        }
        for _ in 0..steps {
            prop_assert!(decrement(&mut record));
        }
        prop_assert_eq!(record.count, start);
    }

    #[test]
    fn rollover_is_idempotent(record in arbitrary_record(), today in arbitrary_date()) {
        let once = rollover(record.clone(), today);
        let twice = rollover(once.clone(), today);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn rollover_leaves_record_current(record in arbitrary_record(), today in arbitrary_date()) {
        let rolled = rollover(record, today);
        prop_assert_eq!(day_state(&rolled, today), DayState::Current);
    }

    #[test]
    fn day_change_resets_and_archives_only_active_days(
        record in arbitrary_record(),
        today in arbitrary_date(),
    ) {
        let last = match record.last_visited_date {
            Some(date) if date != today => date,
            _ => return Ok(()),
        };

        let rolled = rollover(record.clone(), today);
        prop_assert_eq!(rolled.count, 0);
        prop_assert_eq!(rolled.target, record.target);
        prop_assert_eq!(rolled.last_visited_date, Some(today));

        let mut expected: BTreeMap<_, _> = record.history.clone();
        if record.count > 0 {
            expected.insert(last, record.count);
        }
        prop_assert_eq!(rolled.history, expected);
    }

    #[test]
    fn forward_rollover_never_archives_today(
        record in arbitrary_record(),
        days_ahead in 1i64..30,
    ) {
        let Some(last) = record.last_visited_date else {
            return Ok(());
        };
        let record = Record {
            history: record
                .history
                .into_iter()
                .filter(|(date, _)| *date < last)
                .collect(),
            ..record
        };
        let today = last + Duration::days(days_ahead);

        let rolled = rollover(record, today);
        prop_assert!(!rolled.history.contains_key(&today));
        prop_assert!(rolled.history.values().all(|count| *count > 0));
    }

    #[test]
    fn rejected_targets_leave_record_unchanged(
        record in arbitrary_record(),
        raw in prop_oneof![
            Just("0".to_string()),
            (1i64..10_000).prop_map(|n| format!("-{n}")),
            "[a-zA-Z ]{0,8}",
        ],
    ) {
        let mut updated = record.clone();
        prop_assert!(set_target(&mut updated, &raw).is_err());
        prop_assert_eq!(updated, record);
    }

    #[test]
    fn accepted_targets_are_stored(record in arbitrary_record(), target in 1u64..=u64::MAX) {
        let mut updated = record.clone();
        prop_assert_eq!(set_target(&mut updated, &target.to_string()), Ok(target));
        prop_assert_eq!(updated.target, target);
        prop_assert_eq!(updated.count, record.count);
    }

    #[test]
    fn goal_reached_tracks_count_against_target(
        record in arbitrary_record(),
        today in arbitrary_date(),
    ) {
        let snapshot = build_snapshot(&record, today);
        prop_assert_eq!(
            snapshot.goal_reached,
            record.target > 0 && record.count >= record.target
        );
        match snapshot.remaining {
            None => prop_assert_eq!(record.target, 0),
            Some(left) => {
                let exact = i128::from(record.target) - i128::from(record.count);
                prop_assert_eq!(i128::from(left), exact.clamp(i64::MIN.into(), i64::MAX.into()));
            }
        }
    }

    #[test]
    fn snapshot_history_is_descending(record in arbitrary_record(), today in arbitrary_date()) {
        let snapshot = build_snapshot(&record, today);
        prop_assert_eq!(snapshot.history.len(), record.history.len());
        for pair in snapshot.history.windows(2) {
            prop_assert!(pair[0].date > pair[1].date);
        }
    }
}

#[test]
fn scenario_next_day_archives_prior_count() {
    let mut record: Record = serde_json::from_str(
        r#"{"count":0,"target":10,"lastVisitedDate":"2025-06-25","history":{}}"#,
    )
    .unwrap();
    record.count = 4;

    let today = NaiveDate::from_ymd_opt(2025, 6, 26).unwrap();
    let rolled = rollover(record, today);
    assert_eq!(
        serde_json::to_value(&rolled).unwrap(),
        serde_json::json!({
            "count": 0,
            "target": 10,
            "lastVisitedDate": "2025-06-26",
            "history": { "2025-06-25": 4 }
        })
    );
}

#[test]
fn scenario_same_day_revisit_is_unchanged() {
    let today = NaiveDate::from_ymd_opt(2025, 6, 26).unwrap();
    let record = Record {
        count: 3,
        last_visited_date: Some(today),
        ..Record::default()
    };
    assert_eq!(rollover(record.clone(), today), record);
}

#[test]
fn scenario_five_increments_reach_target_of_five() {
    let mut record = Record {
        target: 5,
        ..Record::default()
    };
    for _ in 0..5 {
        increment(&mut record);
    }
    let snapshot = build_snapshot(&record, base_date());
    assert_eq!(snapshot.remaining, Some(0));
    assert!(snapshot.goal_reached);
}

//! Property tests for the habit counters and the streak calculator.

use chrono::{Days, NaiveDate};
use habitloop_core::{calculate_streak, Habit};
use proptest::prelude::*;

fn base_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn to_dates(offsets: &[u16]) -> Vec<NaiveDate> {
    offsets
        .iter()
        .map(|&o| base_day() + Days::new(u64::from(o)))
        .collect()
}

proptest! {
    #[test]
    fn prop_marking_is_idempotent(offsets in proptest::collection::vec(0u16..400, 0..40)) {
        let mut habit = Habit::new("habit");
        for date in to_dates(&offsets) {
            habit.mark_done(date);
        }
        let before = habit.clone();
        for date in to_dates(&offsets) {
            habit.mark_done(date);
        }
        prop_assert_eq!(habit, before);
    }

    #[test]
    fn prop_record_never_below_streak(offsets in proptest::collection::vec(0u16..400, 0..40)) {
        let mut habit = Habit::new("habit");
        for date in to_dates(&offsets) {
            habit.mark_done(date);
            prop_assert!(habit.record() >= habit.streak());
        }
    }

    #[test]
    fn prop_record_and_missed_days_grow_monotonically(
        offsets in proptest::collection::vec(0u16..400, 0..40),
    ) {
        let mut habit = Habit::new("habit");
        let mut last_record = 0;
        let mut last_missed = 0;
        for date in to_dates(&offsets) {
            habit.mark_done(date);
            prop_assert!(habit.record() >= last_record);
            prop_assert!(habit.days_missed() >= last_missed);
            last_record = habit.record();
            last_missed = habit.days_missed();
        }
    }

    #[test]
    fn prop_progress_never_holds_duplicates(
        offsets in proptest::collection::vec(0u16..100, 0..60),
    ) {
        let mut habit = Habit::new("habit");
        for date in to_dates(&offsets) {
            habit.mark_done(date);
        }
        let mut deduped = habit.progress().to_vec();
        deduped.sort_unstable();
        deduped.dedup();
        prop_assert_eq!(deduped.len(), habit.progress().len());
    }

    #[test]
    fn prop_chronological_marking_matches_recomputation(
        mut offsets in proptest::collection::vec(0u16..400, 1..40),
    ) {
        offsets.sort_unstable();
        offsets.dedup();
        let dates = to_dates(&offsets);
        let mut habit = Habit::new("habit");
        for &date in &dates {
            habit.mark_done(date);
        }
        // Asked on the day of the last completion, the fresh reading agrees
        // with the incrementally maintained counter.
        let today = dates[dates.len() - 1];
        prop_assert_eq!(calculate_streak(habit.progress(), today), habit.streak());
    }

    #[test]
    fn prop_success_rate_stays_a_percentage(
        offsets in proptest::collection::vec(0u16..400, 0..40),
    ) {
        let mut habit = Habit::new("habit");
        for date in to_dates(&offsets) {
            habit.mark_done(date);
        }
        let rate = habit.success_rate();
        prop_assert!((0.0..=100.0).contains(&rate));
    }
}

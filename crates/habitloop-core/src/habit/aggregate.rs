//! Habit aggregate implementation.
//!
//! A [`Habit`] owns one habit's complete completion history plus the
//! incrementally maintained streak counters. The only mutation is
//! [`Habit::mark_done`]; everything else is a pure reading of current state.
//!
//! ## Usage
//!
//! ```ignore
//! let mut habit = Habit::new("meditation");
//! habit.mark_done(today);
//! println!("{} day streak, {:?}", habit.streak(), habit.badge());
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Badge, Motivation};
use crate::date::days_between;

/// One tracked habit: identity, history and derived counters.
///
/// Counters are maintained incrementally as completions arrive, under the
/// contract that callers mark dates in chronological order. A date earlier
/// than the last completion is still recorded in the history but leaves the
/// streak counters untouched and moves the completion cursor backwards;
/// ordering is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    name: String,
    /// Completion history in append order. Never contains duplicates.
    #[serde(default)]
    progress: Vec<NaiveDate>,
    /// Length of the current run of consecutive days.
    #[serde(default)]
    streak: u32,
    /// Best streak ever reached.
    #[serde(default)]
    record: u32,
    /// Lifetime count of days skipped between completions.
    #[serde(default)]
    days_missed: u32,
    /// Most recently marked completion date.
    #[serde(default)]
    last_done: Option<NaiveDate>,
}

impl Habit {
    /// Create a fresh habit with an empty history.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            progress: Vec::new(),
            streak: 0,
            record: 0,
            days_missed: 0,
            last_done: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn progress(&self) -> &[NaiveDate] {
        &self.progress
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn record(&self) -> u32 {
        self.record
    }

    pub fn days_missed(&self) -> u32 {
        self.days_missed
    }

    pub fn last_done(&self) -> Option<NaiveDate> {
        self.last_done
    }

    pub fn days_completed(&self) -> usize {
        self.progress.len()
    }

    /// Motivation reading for the current counters.
    pub fn motivation(&self) -> Motivation {
        Motivation::derive(self.streak, self.record, self.days_missed)
    }

    /// Badge tier for the current streak.
    pub fn badge(&self) -> Badge {
        Badge::for_streak(self.streak)
    }

    /// Completed days as a percentage of completed plus missed days,
    /// rounded to one decimal place. An empty history reads 0.
    pub fn success_rate(&self) -> f64 {
        if self.progress.is_empty() {
            return 0.0;
        }
        let done = self.progress.len() as f64;
        let rate = done / (done + self.days_missed as f64) * 100.0;
        (rate * 10.0).round() / 10.0
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Record a completion for `day`.
    ///
    /// Idempotent per date: a day already in the history leaves the habit
    /// completely unchanged. Otherwise the day is appended and the streak
    /// counters are updated from the distance to the previous completion.
    pub fn mark_done(&mut self, day: NaiveDate) {
        if self.progress.contains(&day) {
            return;
        }
        self.progress.push(day);
        self.update_streak(day);
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// Advance the streak counters for a newly recorded `day`.
    ///
    /// One day after the last completion extends the streak. A longer gap
    /// adds the skipped days to `days_missed` and restarts the streak at 1.
    /// A day at or before the last completion changes neither counter.
    fn update_streak(&mut self, day: NaiveDate) {
        match self.last_done {
            Some(last) => {
                let delta = days_between(last, day);
                if delta == 1 {
                    self.streak += 1;
                } else if delta > 1 {
                    self.days_missed += (delta - 1) as u32;
                    self.streak = 1;
                }
            }
            None => self.streak = 1,
        }
        self.last_done = Some(day);
        if self.streak > self.record {
            self.record = self.streak;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn new_habit_starts_empty() {
        let habit = Habit::new("reading");
        assert_eq!(habit.name(), "reading");
        assert!(habit.progress().is_empty());
        assert_eq!(habit.streak(), 0);
        assert_eq!(habit.record(), 0);
        assert_eq!(habit.days_missed(), 0);
        assert_eq!(habit.last_done(), None);
    }

    #[test]
    fn first_completion_starts_streak_at_one() {
        let mut habit = Habit::new("reading");
        habit.mark_done(day("2024-01-01"));
        assert_eq!(habit.streak(), 1);
        assert_eq!(habit.record(), 1);
        assert_eq!(habit.days_missed(), 0);
        assert_eq!(habit.last_done(), Some(day("2024-01-01")));
    }

    #[test]
    fn consecutive_days_extend_streak() {
        let mut habit = Habit::new("reading");
        habit.mark_done(day("2024-01-01"));
        habit.mark_done(day("2024-01-02"));
        habit.mark_done(day("2024-01-03"));
        assert_eq!(habit.streak(), 3);
        assert_eq!(habit.record(), 3);
        assert_eq!(habit.days_missed(), 0);
    }

    #[test]
    fn marking_same_day_twice_changes_nothing() {
        let mut habit = Habit::new("reading");
        habit.mark_done(day("2024-01-01"));
        habit.mark_done(day("2024-01-02"));
        let before = habit.clone();
        habit.mark_done(day("2024-01-02"));
        assert_eq!(habit, before);
        assert_eq!(habit.days_completed(), 2);
    }

    #[test]
    fn gap_counts_missed_days_and_restarts_streak() {
        let mut habit = Habit::new("reading");
        habit.mark_done(day("2024-01-01"));
        habit.mark_done(day("2024-01-04"));
        assert_eq!(habit.streak(), 1);
        assert_eq!(habit.days_missed(), 2);
        assert_eq!(habit.record(), 1);
    }

    #[test]
    fn record_keeps_best_streak_across_resets() {
        let mut habit = Habit::new("reading");
        habit.mark_done(day("2024-01-01"));
        habit.mark_done(day("2024-01-02"));
        habit.mark_done(day("2024-01-03"));
        habit.mark_done(day("2024-01-10"));
        habit.mark_done(day("2024-01-11"));
        assert_eq!(habit.streak(), 2);
        assert_eq!(habit.record(), 3);
        assert_eq!(habit.days_missed(), 6);
    }

    #[test]
    fn earlier_day_is_recorded_but_skips_counters() {
        let mut habit = Habit::new("reading");
        habit.mark_done(day("2024-01-05"));
        habit.mark_done(day("2024-01-02"));
        assert_eq!(habit.days_completed(), 2);
        assert_eq!(habit.streak(), 1);
        assert_eq!(habit.days_missed(), 0);
        // The completion cursor follows the marked date, even backwards.
        assert_eq!(habit.last_done(), Some(day("2024-01-02")));
    }

    #[test]
    fn success_rate_rounds_to_one_decimal() {
        let mut habit = Habit::new("reading");
        habit.mark_done(day("2024-01-01"));
        habit.mark_done(day("2024-01-04"));
        // 2 done, 2 missed.
        assert_eq!(habit.success_rate(), 50.0);

        let mut habit = Habit::new("water");
        habit.mark_done(day("2024-01-01"));
        habit.mark_done(day("2024-01-04"));
        habit.mark_done(day("2024-01-05"));
        // 3 done, 2 missed: 60.0 exactly.
        assert_eq!(habit.success_rate(), 60.0);

        let mut habit = Habit::new("runs");
        habit.mark_done(day("2024-01-01"));
        habit.mark_done(day("2024-01-03"));
        // 2 done, 1 missed: 66.666.. rounds to 66.7.
        assert_eq!(habit.success_rate(), 66.7);

        habit.mark_done(day("2024-01-04"));
        // 3 done, 1 missed.
        assert_eq!(habit.success_rate(), 75.0);
    }

    #[test]
    fn success_rate_is_zero_for_empty_history() {
        let habit = Habit::new("reading");
        assert_eq!(habit.success_rate(), 0.0);
    }

    #[test]
    fn success_rate_is_full_without_missed_days() {
        let mut habit = Habit::new("reading");
        habit.mark_done(day("2024-01-01"));
        assert_eq!(habit.success_rate(), 100.0);
    }

    #[test]
    fn serializes_dates_as_iso_strings() {
        let mut habit = Habit::new("reading");
        habit.mark_done(day("2024-01-31"));
        habit.mark_done(day("2024-02-01"));
        let json = serde_json::to_value(&habit).unwrap();
        assert_eq!(json["name"], "reading");
        assert_eq!(json["progress"][0], "2024-01-31");
        assert_eq!(json["progress"][1], "2024-02-01");
        assert_eq!(json["last_done"], "2024-02-01");
        assert_eq!(json["streak"], 2);
    }

    #[test]
    fn deserializes_with_defaults_for_missing_fields() {
        let habit: Habit = serde_json::from_str(r#"{"name":"reading"}"#).unwrap();
        assert_eq!(habit.name(), "reading");
        assert!(habit.progress().is_empty());
        assert_eq!(habit.streak(), 0);
        assert_eq!(habit.record(), 0);
        assert_eq!(habit.days_missed(), 0);
        assert_eq!(habit.last_done(), None);
    }

    #[test]
    fn roundtrips_through_json() {
        let mut habit = Habit::new("reading");
        habit.mark_done(day("2024-01-01"));
        habit.mark_done(day("2024-01-02"));
        habit.mark_done(day("2024-01-05"));
        let json = serde_json::to_string(&habit).unwrap();
        let back: Habit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, habit);
    }
}

//! Cross-habit statistics.
//!
//! Pure projections over a slice of habits: a per-habit overview row and a
//! whole-tracker summary. Nothing here mutates state.

use serde::{Deserialize, Serialize};

use crate::habit::{Badge, Habit, Motivation};

/// One habit's state flattened for listing and reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitOverview {
    pub name: String,
    pub days_completed: usize,
    pub streak: u32,
    pub record: u32,
    pub success_rate: f64,
    pub motivation: Motivation,
    pub badge: Badge,
}

impl HabitOverview {
    pub fn of(habit: &Habit) -> Self {
        Self {
            name: habit.name().to_string(),
            days_completed: habit.days_completed(),
            streak: habit.streak(),
            record: habit.record(),
            success_rate: habit.success_rate(),
            motivation: habit.motivation(),
            badge: habit.badge(),
        }
    }
}

/// Totals across every habit of one account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerSummary {
    pub total_habits: usize,
    pub total_days_completed: usize,
    pub best_streak: u32,
}

/// Summarize a slice of habits. Empty input reads all zeroes.
pub fn summarize(habits: &[Habit]) -> TrackerSummary {
    TrackerSummary {
        total_habits: habits.len(),
        total_days_completed: habits.iter().map(Habit::days_completed).sum(),
        best_streak: habits.iter().map(Habit::streak).max().unwrap_or(0),
    }
}

//! Motivation reading derived from the streak counters.
//!
//! The reading is a strict priority ladder: rules are checked top to
//! bottom and the first match wins. Early-streak encouragements outrank
//! record chasing, so the record only shows through once a streak has
//! reached seven days.

use serde::{Deserialize, Serialize};

/// Qualitative reading of where a habit stands right now.
///
/// Derived from counters alone, so states that normal marking cannot
/// produce (a streak above the record, for instance) still map to a
/// defined reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Motivation {
    /// No current streak.
    StartToday,
    /// Streak of one or two days.
    GoodStart,
    /// Streak of three to six days.
    KeepGoing,
    /// A week or more, still short of the record.
    ChasingRecord { days_to_record: u32 },
    /// Sitting exactly on the record.
    TyingRecord,
    /// Past the previous record.
    NewRecord,
    /// Long streak with missed days on the books.
    SmallEffort,
    /// Long flawless streak.
    Established,
}

impl Motivation {
    /// Evaluate the ladder for the given counters. First match wins.
    pub fn derive(streak: u32, record: u32, days_missed: u32) -> Self {
        if streak == 0 {
            return Motivation::StartToday;
        }
        if streak < 3 {
            return Motivation::GoodStart;
        }
        if streak < 7 {
            return Motivation::KeepGoing;
        }
        if streak < record {
            return Motivation::ChasingRecord {
                days_to_record: record - streak,
            };
        }
        if streak == record && streak >= 7 {
            return Motivation::TyingRecord;
        }
        if streak > record {
            return Motivation::NewRecord;
        }
        if days_missed > 0 {
            return Motivation::SmallEffort;
        }
        Motivation::Established
    }

    /// Human-readable message for this reading.
    pub fn message(&self) -> String {
        match self {
            Motivation::StartToday => "Start today 💪".to_string(),
            Motivation::GoodStart => "Good start, keep it up! 🌱".to_string(),
            Motivation::KeepGoing => "Keep it going 🔥".to_string(),
            Motivation::ChasingRecord { days_to_record } => {
                let unit = if *days_to_record > 1 { "days" } else { "day" };
                format!("{days_to_record} {unit} from your record! 🚀")
            }
            Motivation::TyingRecord => "You are tying your record! 🏆".to_string(),
            Motivation::NewRecord => "New record! Incredible! 🎉".to_string(),
            Motivation::SmallEffort => "One small effort every day 📈".to_string(),
            Motivation::Established => "Solid habit, well done 🧘".to_string(),
        }
    }
}

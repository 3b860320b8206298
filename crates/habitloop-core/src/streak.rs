//! Fresh streak recomputation from raw completion history.
//!
//! [`calculate_streak`] derives the current streak from the history alone,
//! independent of the counters a [`crate::habit::Habit`] maintains. The two
//! can legitimately disagree: the stored counter freezes at the last marking
//! while this reading decays to zero once a day goes unmarked.

use chrono::NaiveDate;

use crate::date::days_between;

/// Length of the consecutive run ending today or yesterday.
///
/// The reference day is passed in, never read from the clock. A streak only
/// anchors if the most recent completion is `today` or the day before;
/// anything older reads zero. From the anchor the history is walked
/// backwards one day at a time and the count stops at the first gap.
/// Input order does not matter.
pub fn calculate_streak(progress: &[NaiveDate], today: NaiveDate) -> u32 {
    if progress.is_empty() {
        return 0;
    }

    let mut dates: Vec<NaiveDate> = progress.to_vec();
    dates.sort_unstable_by(|a, b| b.cmp(a));

    let yesterday = today.pred_opt();
    let mut streak = 0u32;
    let mut prev: Option<NaiveDate> = None;

    for &date in &dates {
        match prev {
            None => {
                if date == today || Some(date) == yesterday {
                    streak = 1;
                    prev = Some(date);
                } else {
                    break;
                }
            }
            Some(newer) => {
                if days_between(date, newer) == 1 {
                    streak += 1;
                    prev = Some(date);
                } else {
                    break;
                }
            }
        }
    }

    streak
}

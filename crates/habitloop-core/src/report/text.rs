//! Plain-text daily progress report.

use chrono::NaiveDate;

use crate::habit::Habit;
use crate::stats::summarize;

/// Render the daily progress report for one account.
///
/// Layout: title block, account and date, tracker summary, then one block
/// per habit with its streak, record, badge and motivation message.
pub fn progress_report(title: &str, account: &str, habits: &[Habit], today: NaiveDate) -> String {
    let summary = summarize(habits);
    let mut out = String::new();

    out.push_str(title);
    out.push('\n');
    out.push_str("Daily Progress Report\n\n");
    out.push_str(&format!("User: {account}\n"));
    out.push_str(&format!("Date: {}\n\n", today.format("%d %B %Y")));

    out.push_str("SUMMARY\n");
    out.push_str(&format!("Total habits: {}\n", summary.total_habits));
    out.push_str(&format!(
        "Total days completed: {}\n",
        summary.total_days_completed
    ));
    out.push_str(&format!("Best streak: {} days\n\n", summary.best_streak));

    out.push_str("HABITS\n");
    if habits.is_empty() {
        out.push_str("No habits tracked yet.\n");
    }
    for habit in habits {
        out.push_str(&format!("{}\n", habit.name()));
        out.push_str(&format!("  Current streak: {} days\n", habit.streak()));
        out.push_str(&format!("  Record: {} days\n", habit.record()));
        out.push_str(&format!("  Badge: {}\n", habit.badge().label()));
        out.push_str(&format!("  Motivation: {}\n\n", habit.motivation().message()));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn report_carries_account_date_and_summary() {
        let mut habit = Habit::new("reading");
        habit.mark_done(day("2024-03-09"));
        habit.mark_done(day("2024-03-10"));

        let report = progress_report(
            "HABITLOOP",
            "ada@gmail.com",
            &[habit],
            day("2024-03-10"),
        );
        assert!(report.starts_with("HABITLOOP\nDaily Progress Report\n"));
        assert!(report.contains("User: ada@gmail.com\n"));
        assert!(report.contains("Date: 10 March 2024\n"));
        assert!(report.contains("Total habits: 1\n"));
        assert!(report.contains("Total days completed: 2\n"));
        assert!(report.contains("Best streak: 2 days\n"));
    }

    #[test]
    fn each_habit_gets_a_block_with_motivation() {
        let mut reading = Habit::new("reading");
        reading.mark_done(day("2024-03-10"));
        let water = Habit::new("water");

        let report = progress_report("HABITLOOP", "ada@gmail.com", &[reading, water], day("2024-03-10"));
        assert!(report.contains("reading\n  Current streak: 1 days\n  Record: 1 days\n"));
        assert!(report.contains("water\n  Current streak: 0 days\n"));
        assert!(report.contains("Start today"));
    }

    #[test]
    fn habit_block_carries_the_badge_tier() {
        let mut running = Habit::new("running");
        for d in ["2024-03-08", "2024-03-09", "2024-03-10"] {
            running.mark_done(day(d));
        }
        let water = Habit::new("water");

        let report = progress_report("HABITLOOP", "ada@gmail.com", &[running, water], day("2024-03-10"));
        assert!(report.contains("  Badge: 🔥 On fire\n"));
        assert!(report.contains("  Badge: 🎯 Beginner\n"));
    }

    #[test]
    fn empty_tracker_says_so() {
        let report = progress_report("HABITLOOP", "ada@gmail.com", &[], day("2024-03-10"));
        assert!(report.contains("No habits tracked yet.\n"));
        assert!(report.contains("Total habits: 0\n"));
    }
}

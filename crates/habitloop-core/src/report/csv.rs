//! CSV export of habit state.

use crate::habit::Habit;

/// Render habits as CSV with a fixed `name,days_completed,streak,record`
/// header. Fields are quoted only when they need it.
pub fn habits_csv(habits: &[Habit]) -> String {
    let mut out = String::from("name,days_completed,streak,record\n");
    for habit in habits {
        out.push_str(&format!(
            "{},{},{},{}\n",
            escape(habit.name()),
            habit.days_completed(),
            habit.streak(),
            habit.record()
        ));
    }
    out
}

/// Quote a field if it contains a delimiter, quote or newline.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

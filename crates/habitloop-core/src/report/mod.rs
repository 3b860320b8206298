//! Report rendering: CSV export and the plain-text progress report.

mod csv;
mod text;

pub use csv::habits_csv;
pub use text::progress_report;

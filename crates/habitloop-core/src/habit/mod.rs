//! Habit aggregate and its derived readings.

mod aggregate;
mod badge;
mod motivation;

pub use aggregate::Habit;
pub use badge::Badge;
pub use motivation::Motivation;

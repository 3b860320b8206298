//! # Habitloop Core Library
//!
//! This library provides the core business logic for the Habitloop habit
//! tracker. It implements a CLI-first philosophy where all operations are
//! available via a standalone CLI binary working against a plain JSON
//! tracker file.
//!
//! ## Architecture
//!
//! - **Habit Aggregate**: Completion history plus incrementally maintained
//!   streak counters, updated one marked day at a time
//! - **Streak Calculator**: Pure recomputation of the current streak from
//!   raw history, with the reference day injected by the caller
//! - **Store**: JSON tracker document holding every account and its habits
//! - **Reports**: CSV export and a plain-text daily progress report
//!
//! ## Key Components
//!
//! - [`Habit`]: One habit's history and counters
//! - [`calculate_streak`]: History-based streak reading
//! - [`JsonStore`]: Tracker file persistence
//! - [`Config`]: Application configuration management

pub mod account;
pub mod config;
pub mod date;
pub mod error;
pub mod habit;
pub mod report;
pub mod stats;
pub mod store;
pub mod streak;

pub use config::Config;
pub use error::{ConfigError, CoreError, Result, StoreError, ValidationError};
pub use habit::{Badge, Habit, Motivation};
pub use stats::{HabitOverview, TrackerSummary};
pub use store::{JsonStore, TrackerData, UserRecord};
pub use streak::calculate_streak;

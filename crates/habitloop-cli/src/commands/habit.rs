//! Habit tracking commands for CLI.

use clap::Subcommand;
use habitloop_core::{Config, HabitOverview, ValidationError};

use super::common;

#[derive(Subcommand)]
pub enum HabitAction {
    /// Start tracking a habit
    Add {
        /// Habit name, unique per account ignoring case
        name: String,
        /// Account address (defaults to the configured account)
        #[arg(long)]
        account: Option<String>,
    },
    /// List habits with their current state
    List {
        /// Account address (defaults to the configured account)
        #[arg(long)]
        account: Option<String>,
    },
    /// Mark a habit done for a day
    Done {
        /// Habit name
        name: String,
        /// Day to mark, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
        /// Account address (defaults to the configured account)
        #[arg(long)]
        account: Option<String>,
    },
    /// Stop tracking a habit
    Remove {
        /// Habit name
        name: String,
        /// Account address (defaults to the configured account)
        #[arg(long)]
        account: Option<String>,
    },
}

pub fn run(action: HabitAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let store = common::open_store(&config)?;

    match action {
        HabitAction::Add { name, account } => {
            let email = common::resolve_account(&config, account)?;
            store.update(|data| {
                let user = data
                    .user_mut(&email)
                    .ok_or_else(|| ValidationError::UnknownAccount(email.clone()))?;
                user.add_habit(&name)?;
                Ok(())
            })?;
            println!("Habit added: {}", name.trim());
        }
        HabitAction::List { account } => {
            let email = common::resolve_account(&config, account)?;
            let data = store.load()?;
            let user = data
                .user(&email)
                .ok_or_else(|| ValidationError::UnknownAccount(email.clone()))?;
            let rows: Vec<HabitOverview> = user.habits.iter().map(HabitOverview::of).collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        HabitAction::Done {
            name,
            date,
            account,
        } => {
            let email = common::resolve_account(&config, account)?;
            let day = common::resolve_day(date)?;
            let marked = store.update(|data| {
                let user = data
                    .user_mut(&email)
                    .ok_or_else(|| ValidationError::UnknownAccount(email.clone()))?;
                let habit = user
                    .habit_mut(&name)
                    .ok_or_else(|| ValidationError::UnknownHabit(name.clone()))?;
                habit.mark_done(day);
                Ok(habit.clone())
            })?;
            log::info!("marked '{}' done for {day}", marked.name());
            println!("Marked done: {} on {day}", marked.name());
            println!("{}", serde_json::to_string_pretty(&HabitOverview::of(&marked))?);
        }
        HabitAction::Remove { name, account } => {
            let email = common::resolve_account(&config, account)?;
            let removed = store.update(|data| {
                let user = data
                    .user_mut(&email)
                    .ok_or_else(|| ValidationError::UnknownAccount(email.clone()))?;
                Ok(user.remove_habit(&name))
            })?;
            if removed {
                println!("Habit removed: {name}");
            } else {
                return Err(ValidationError::UnknownHabit(name).into());
            }
        }
    }
    Ok(())
}

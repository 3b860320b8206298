//! Statistics commands for CLI.

use clap::Subcommand;
use habitloop_core::{calculate_streak, stats, Config, ValidationError};

use super::common;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Totals across all habits of an account
    Summary {
        /// Account address (defaults to the configured account)
        #[arg(long)]
        account: Option<String>,
    },
    /// Stored streak next to a fresh recomputation for one habit
    Streak {
        /// Habit name
        name: String,
        /// Day to compute the fresh streak for, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
        /// Account address (defaults to the configured account)
        #[arg(long)]
        account: Option<String>,
    },
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let store = common::open_store(&config)?;

    match action {
        StatsAction::Summary { account } => {
            let email = common::resolve_account(&config, account)?;
            let data = store.load()?;
            let user = data
                .user(&email)
                .ok_or_else(|| ValidationError::UnknownAccount(email.clone()))?;
            let summary = stats::summarize(&user.habits);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        StatsAction::Streak {
            name,
            date,
            account,
        } => {
            let email = common::resolve_account(&config, account)?;
            let day = common::resolve_day(date)?;
            let data = store.load()?;
            let user = data
                .user(&email)
                .ok_or_else(|| ValidationError::UnknownAccount(email.clone()))?;
            let habit = user
                .habit(&name)
                .ok_or_else(|| ValidationError::UnknownHabit(name.clone()))?;
            let reading = serde_json::json!({
                "name": habit.name(),
                "date": day.to_string(),
                "stored_streak": habit.streak(),
                "current_streak": calculate_streak(habit.progress(), day),
            });
            println!("{}", serde_json::to_string_pretty(&reading)?);
        }
    }
    Ok(())
}

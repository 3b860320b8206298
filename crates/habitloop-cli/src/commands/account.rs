//! Account management commands for CLI.

use clap::Subcommand;
use habitloop_core::{account, Config, ValidationError};

use super::common;

#[derive(Subcommand)]
pub enum AccountAction {
    /// Register a new account
    Register {
        /// Account address (Gmail only)
        email: String,
        /// Password: at least 8 characters, one uppercase letter, one digit
        #[arg(long)]
        password: String,
    },
    /// Check a password against the stored hash
    Verify {
        /// Account address
        email: String,
        /// Password to check
        #[arg(long)]
        password: String,
    },
    /// List registered accounts
    List,
}

pub fn run(action: AccountAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let store = common::open_store(&config)?;

    match action {
        AccountAction::Register { email, password } => {
            account::validate_email(&email)?;
            account::validate_password(&password)?;
            let hash = account::hash_password(&password)?;
            store.update(|data| data.register(&email, &hash).map_err(Into::into))?;
            log::info!("registered account {email}");
            println!("Account registered: {email}");
        }
        AccountAction::Verify { email, password } => {
            let data = store.load()?;
            let user = data
                .user(&email)
                .ok_or(ValidationError::UnknownAccount(email.clone()))?;
            if account::verify_password(&password, &user.password)? {
                println!("Password matches for {email}");
            } else {
                return Err("invalid email or password".into());
            }
        }
        AccountAction::List => {
            let data = store.load()?;
            if data.users.is_empty() {
                println!("No accounts registered");
            }
            for user in &data.users {
                println!("{} ({} habits)", user.email, user.habits.len());
            }
        }
    }
    Ok(())
}

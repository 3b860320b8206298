//! The tracker document: accounts and their habits.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::habit::Habit;

/// Root of the persisted document. One record per registered account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackerData {
    #[serde(default)]
    pub users: Vec<UserRecord>,
}

/// One account: address, password hash and tracked habits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub email: String,
    /// Argon2 PHC hash string, never the plain password.
    pub password: String,
    #[serde(default)]
    pub habits: Vec<Habit>,
}

impl TrackerData {
    /// Add a new account. The address must not already be registered;
    /// credential validation happens before this point.
    pub fn register(&mut self, email: &str, password_hash: &str) -> Result<(), ValidationError> {
        if self.users.iter().any(|u| u.email == email) {
            return Err(ValidationError::EmailTaken(email.to_string()));
        }
        self.users.push(UserRecord {
            email: email.to_string(),
            password: password_hash.to_string(),
            habits: Vec::new(),
        });
        Ok(())
    }

    pub fn user(&self, email: &str) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.email == email)
    }

    pub fn user_mut(&mut self, email: &str) -> Option<&mut UserRecord> {
        self.users.iter_mut().find(|u| u.email == email)
    }
}

impl UserRecord {
    /// Start tracking a habit. Names are trimmed, must be non-empty and
    /// must be unique case-insensitively within the account.
    pub fn add_habit(&mut self, name: &str) -> Result<(), ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyHabitName);
        }
        let lowered = name.to_lowercase();
        if self.habits.iter().any(|h| h.name().to_lowercase() == lowered) {
            return Err(ValidationError::DuplicateHabit(name.to_string()));
        }
        self.habits.push(Habit::new(name));
        Ok(())
    }

    /// Exact-name lookup.
    pub fn habit(&self, name: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.name() == name)
    }

    pub fn habit_mut(&mut self, name: &str) -> Option<&mut Habit> {
        self.habits.iter_mut().find(|h| h.name() == name)
    }

    /// Stop tracking a habit. Returns false if no habit had that name.
    pub fn remove_habit(&mut self, name: &str) -> bool {
        let before = self.habits.len();
        self.habits.retain(|h| h.name() != name);
        self.habits.len() < before
    }
}

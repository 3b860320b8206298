mod data;
mod json;

pub use data::{TrackerData, UserRecord};
pub use json::JsonStore;

use std::path::PathBuf;

use crate::error::Result;

/// Returns the tracker data directory.
///
/// `HABITLOOP_DATA_DIR` overrides the location entirely. Otherwise the
/// directory is `~/.config/habitloop[-dev]/` based on HABITLOOP_ENV; set
/// HABITLOOP_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("HABITLOOP_DATA_DIR") {
        let dir = PathBuf::from(dir);
        std::fs::create_dir_all(&dir)?;
        return Ok(dir);
    }

    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("HABITLOOP_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("habitloop-dev")
    } else {
        base_dir.join("habitloop")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

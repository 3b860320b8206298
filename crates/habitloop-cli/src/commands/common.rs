//! Shared helpers for CLI commands.

use chrono::NaiveDate;
use habitloop_core::{Config, JsonStore};

/// Open the tracker store: an explicit `store.data_file` from the config
/// wins, otherwise the default file in the data directory.
pub fn open_store(config: &Config) -> Result<JsonStore, Box<dyn std::error::Error>> {
    let store = match &config.store.data_file {
        Some(path) => JsonStore::at(path.clone()),
        None => JsonStore::open_default()?,
    };
    log::debug!("using tracker at {}", store.path().display());
    Ok(store)
}

/// Account for this invocation: the `--account` flag if given, otherwise
/// the configured default account.
pub fn resolve_account(
    config: &Config,
    flag: Option<String>,
) -> Result<String, Box<dyn std::error::Error>> {
    flag.or_else(|| config.default_account.clone())
        .ok_or_else(|| "no account given; pass --account or set default_account in config".into())
}

/// Local calendar day.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// The day a command operates on: an explicit `--date` or today.
pub fn resolve_day(date: Option<String>) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match date {
        Some(raw) => Ok(habitloop_core::date::parse_day(&raw)?),
        None => Ok(today()),
    }
}

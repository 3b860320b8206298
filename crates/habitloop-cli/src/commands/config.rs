use clap::Subcommand;
use habitloop_core::{Config, ConfigError, CoreError};

/// Keys the tracker understands, listed when a lookup misses.
const CONFIG_KEYS: &[&str] = &[
    "default_account",
    "store.data_file",
    "report.export_dir",
    "report.title",
];

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print one configuration value
    Get {
        /// Dot-separated key, e.g. "default_account" or "report.title"
        key: String,
    },
    /// Change a configuration value and persist it
    Set {
        /// Dot-separated key, e.g. "store.data_file"
        key: String,
        /// New value, stored as text
        value: String,
    },
    /// Print the whole configuration
    List,
    /// Restore the built-in defaults
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            let value = config.get(&key).ok_or_else(|| unknown_key(&key))?;
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            match config.set(&key, &value) {
                Ok(()) => println!("Set {key} = {value}"),
                Err(CoreError::Config(ConfigError::UnknownKey(_))) => {
                    return Err(unknown_key(&key));
                }
                Err(e) => return Err(e.into()),
            }
        }
        ConfigAction::List => {
            let config = Config::load()?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Reset => {
            Config::default().save()?;
            println!("Configuration reset to defaults");
        }
    }
    Ok(())
}

fn unknown_key(key: &str) -> Box<dyn std::error::Error> {
    format!(
        "Unknown configuration key: {key} (expected one of: {})",
        CONFIG_KEYS.join(", ")
    )
    .into()
}

//! Report export commands for CLI.

use std::path::PathBuf;

use clap::Subcommand;
use habitloop_core::{report, Config, UserRecord, ValidationError};

use super::common;

#[derive(Subcommand)]
pub enum ReportAction {
    /// Export habits as CSV
    Csv {
        /// Output file (default: report.export_dir/habits.csv, else stdout)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Account address (defaults to the configured account)
        #[arg(long)]
        account: Option<String>,
    },
    /// Render the daily progress report as text
    Text {
        /// Output file (default: report.export_dir/progress_report.txt, else stdout)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Account address (defaults to the configured account)
        #[arg(long)]
        account: Option<String>,
    },
}

pub fn run(action: ReportAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let store = common::open_store(&config)?;

    match action {
        ReportAction::Csv { out, account } => {
            let email = common::resolve_account(&config, account)?;
            let data = store.load()?;
            let user = lookup(&data, &email)?;
            let csv = report::habits_csv(&user.habits);
            deliver(csv, out, &config, "habits.csv")?;
        }
        ReportAction::Text { out, account } => {
            let email = common::resolve_account(&config, account)?;
            let data = store.load()?;
            let user = lookup(&data, &email)?;
            let text = report::progress_report(
                &config.report.title,
                &user.email,
                &user.habits,
                common::today(),
            );
            deliver(text, out, &config, "progress_report.txt")?;
        }
    }
    Ok(())
}

fn lookup<'a>(
    data: &'a habitloop_core::TrackerData,
    email: &str,
) -> Result<&'a UserRecord, Box<dyn std::error::Error>> {
    Ok(data
        .user(email)
        .ok_or_else(|| ValidationError::UnknownAccount(email.to_string()))?)
}

/// Write to `--out`, else to the configured export directory, else stdout.
fn deliver(
    content: String,
    out: Option<PathBuf>,
    config: &Config,
    default_name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let target = out.or_else(|| {
        config
            .report
            .export_dir
            .as_ref()
            .map(|dir| dir.join(default_name))
    });
    match target {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(&path, content)?;
            log::info!("report written to {}", path.display());
            println!("Report written: {}", path.display());
        }
        None => print!("{content}"),
    }
    Ok(())
}

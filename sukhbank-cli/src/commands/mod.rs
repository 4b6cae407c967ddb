//! CLI command implementations

pub mod cards;
pub mod config;
pub mod history;
pub mod login;
pub mod logs;
pub mod receipt;
pub mod security;
pub mod send;
pub mod status;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use sukhbank_core::SukhbankContext;

/// Get the sukhbank directory from environment or default
pub fn get_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("SUKHBANK_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".sukhbank")
    }
}

/// Get or create the sukhbank context
pub fn get_context() -> Result<SukhbankContext> {
    let data_dir = get_data_dir();

    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory: {:?}", data_dir))?;

    SukhbankContext::new(&data_dir).context("Failed to initialize sukhbank context")
}

/// Spin for a fixed delay to simulate a verification round trip
///
/// Skipped when stdout is not a terminal, so scripted runs stay fast.
pub fn simulate_delay(message: &'static str, millis: u64) {
    if !atty::is(atty::Stream::Stdout) {
        return;
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    std::thread::sleep(Duration::from_millis(millis));
    spinner.finish_and_clear();
}

//! Security command - two-factor and biometric preferences

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use super::get_context;

#[derive(Subcommand)]
pub enum SecurityCommands {
    /// Show security preferences
    Status,
    /// Enable two-factor authentication
    #[command(name = "2fa-on")]
    TwoFactorOn,
    /// Enable biometric verification
    #[command(name = "biometric-on")]
    BiometricOn,
}

pub fn run(command: Option<SecurityCommands>) -> Result<()> {
    let mut ctx = get_context()?;

    match command.unwrap_or(SecurityCommands::Status) {
        SecurityCommands::Status => {
            let two_factor = ctx.store.two_factor_enabled();
            let biometric = ctx.store.biometric_enabled();

            let render = |on: bool| {
                if on {
                    "enabled".green()
                } else {
                    "disabled".yellow()
                }
            };
            println!("Two-factor: {}", render(two_factor));
            println!("Biometric:  {}", render(biometric));

            let score = match (two_factor, biometric) {
                (true, true) => 95,
                (true, false) | (false, true) => 75,
                (false, false) => 60,
            };
            println!("Security score: {}/100", score);
            Ok(())
        }
        SecurityCommands::TwoFactorOn => {
            ctx.store.enable_two_factor()?;
            let _ = ctx.events.log_command("security 2fa-on");
            println!("{}", "Two-factor authentication enabled".green());
            Ok(())
        }
        SecurityCommands::BiometricOn => {
            ctx.store.enable_biometric()?;
            let _ = ctx.events.log_command("security biometric-on");
            println!("{}", "Biometric verification enabled".green());
            Ok(())
        }
    }
}

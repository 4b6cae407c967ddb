//! Sukhbank CLI - a simulated secure bank in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{cards, config, history, login, logs, receipt, security, send, status};

/// Sukhbank - simulated secure banking in your terminal
#[derive(Parser)]
#[command(name = "sukh", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in with simulated OTP and biometric steps
    Login {
        /// Email address (prompted when omitted)
        #[arg(long)]
        email: Option<String>,
        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
        /// One-time code (prompted when omitted; any 6 digits pass)
        #[arg(long)]
        otp: Option<String>,
    },

    /// Sign out of the current session
    Logout,

    /// Show wallet status and dashboard aggregates
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage payment cards
    Cards {
        #[command(subcommand)]
        command: Option<cards::CardCommands>,
    },

    /// Send money with a safety check
    Send {
        /// Recipient display name
        #[arg(long)]
        recipient: Option<String>,
        /// Recipient account or UPI id
        #[arg(long)]
        account: Option<String>,
        /// Amount to send
        #[arg(long)]
        amount: Option<String>,
        /// Spending category
        #[arg(long)]
        category: Option<String>,
        /// Optional note attached to the transaction
        #[arg(long)]
        note: Option<String>,
        /// One-time code (prompted when omitted)
        #[arg(long)]
        otp: Option<String>,
    },

    /// Show transaction history
    History {
        /// Maximum number of rows
        #[arg(long, default_value_t = 20)]
        limit: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Security preferences
    Security {
        #[command(subcommand)]
        command: Option<security::SecurityCommands>,
    },

    /// Write a receipt for a past transaction
    Receipt {
        /// Transaction id (full or unique prefix)
        id: String,
    },

    /// Show recent application events
    Logs {
        /// Maximum number of entries
        #[arg(long, default_value_t = 20)]
        limit: usize,
        /// Delete entries older than this many days before listing
        #[arg(long)]
        prune_days: Option<i64>,
    },

    /// View or change app settings
    Config {
        /// Currency symbol used in displays
        #[arg(long)]
        currency: Option<String>,
        /// Write a receipt automatically after each transfer
        #[arg(long)]
        auto_receipt: Option<bool>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Login {
            email,
            password,
            otp,
        } => login::run(email, password, otp),
        Commands::Logout => login::run_logout(),
        Commands::Status { json } => status::run(json),
        Commands::Cards { command } => cards::run(command),
        Commands::Send {
            recipient,
            account,
            amount,
            category,
            note,
            otp,
        } => send::run(send::SendArgs {
            recipient,
            account,
            amount,
            category,
            note,
            otp,
        }),
        Commands::History { limit, json } => history::run(limit, json),
        Commands::Security { command } => security::run(command),
        Commands::Receipt { id } => receipt::run(&id),
        Commands::Logs { limit, prune_days } => logs::run(limit, prune_days),
        Commands::Config {
            currency,
            auto_receipt,
        } => config::run(currency, auto_receipt),
    }
}

//! Send command - money transfer with safety check and step-up verification

use anyhow::{anyhow, bail, Result};
use colored::Colorize;
use dialoguer::Input;
use rust_decimal::Decimal;

use super::{get_context, simulate_delay};
use crate::output;
use sukhbank_core::services::write_receipt;
use sukhbank_core::{LogEvent, TransferRequest};

pub struct SendArgs {
    pub recipient: Option<String>,
    pub account: Option<String>,
    pub amount: Option<String>,
    pub category: Option<String>,
    pub note: Option<String>,
    pub otp: Option<String>,
}

pub fn run(args: SendArgs) -> Result<()> {
    let mut ctx = get_context()?;

    if !ctx.store.is_authenticated() {
        bail!("Not signed in. Run 'sukh login' first.");
    }

    let recipient = prompt_if_missing(args.recipient, "Recipient name")?;
    let account = prompt_if_missing(args.account, "Recipient account / UPI id")?;
    let amount_raw = prompt_if_missing(args.amount, "Amount")?;
    let category = prompt_if_missing(args.category, "Category")?;

    let amount: Decimal = amount_raw
        .parse()
        .map_err(|_| anyhow!("'{}' is not a valid amount", amount_raw))?;

    // Fabricated fraud check before the money moves
    let score = ctx.transfers.check_safety(&account);
    if score >= 90 {
        println!("Safety score: {}", format!("{}/100", score).green());
    } else {
        println!("Safety score: {}", format!("{}/100", score).yellow());
        println!("This recipient is outside the trusted range; double-check the account.");
    }

    println!("An OTP has been sent for transaction verification");
    let otp = match args.otp {
        Some(o) => o,
        None => Input::<String>::new()
            .with_prompt("6-digit OTP")
            .interact_text()?,
    };
    if !ctx.auth.verify_otp(&otp) {
        let _ = ctx
            .events
            .log(LogEvent::new("transfer_failed").with_error("invalid otp"));
        bail!("Invalid OTP: please enter a 6-digit code");
    }

    simulate_delay("Verifying biometric...", 1500);
    if !ctx.auth.verify_biometric() {
        bail!("Biometric verification failed");
    }

    let transaction = ctx.transfers.send(
        &mut ctx.store,
        TransferRequest {
            recipient,
            recipient_account: account,
            amount,
            category,
            description: args.note,
            safety_score: Some(score),
        },
    )?;

    let _ = ctx.events.log_command("send");
    output::success(&format!(
        "{}{} sent to {}",
        ctx.config.currency_symbol, transaction.amount, transaction.recipient
    ));

    if ctx.config.auto_receipt {
        let holder = ctx
            .store
            .user()
            .map(|u| u.name.clone())
            .unwrap_or_default();
        let path = write_receipt(
            &ctx.receipt_dir(),
            &transaction,
            &holder,
            &ctx.config.currency_symbol,
        )?;
        println!("Receipt written to {}", path.display());
    }

    Ok(())
}

fn prompt_if_missing(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::<String>::new()
            .with_prompt(prompt)
            .interact_text()?),
    }
}

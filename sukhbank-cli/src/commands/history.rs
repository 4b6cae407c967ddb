//! History command - transaction listing

use anyhow::{bail, Result};
use colored::Colorize;

use super::get_context;
use crate::output;
use sukhbank_core::Direction;

pub fn run(limit: usize, json: bool) -> Result<()> {
    let ctx = get_context()?;

    if !ctx.store.is_authenticated() {
        bail!("Not signed in. Run 'sukh login' first.");
    }

    let transactions = ctx.store.transactions();

    if json {
        let page: Vec<_> = transactions.iter().take(limit).collect();
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    let currency = &ctx.config.currency_symbol;
    let mut table = output::create_table();
    table.set_header(vec![
        "ID",
        "Date",
        "Type",
        "Amount",
        "Counterparty",
        "Category",
        "Safety",
    ]);

    for tx in transactions.iter().take(limit) {
        let direction = match tx.direction {
            Direction::Debit => "debit".red().to_string(),
            Direction::Credit => "credit".green().to_string(),
        };
        let safety = tx
            .safety_score
            .map(|s| format!("{}/100", s))
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            tx.id.to_string()[..8].to_string(),
            tx.date.format("%Y-%m-%d %H:%M").to_string(),
            direction,
            output::format_amount(&tx.amount, currency),
            tx.recipient.clone(),
            tx.category.clone(),
            safety,
        ]);
    }

    println!("{}", table);
    println!(
        "{} of {} transactions",
        transactions.len().min(limit),
        transactions.len()
    );
    Ok(())
}

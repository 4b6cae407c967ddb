//! Status command - wallet status and dashboard aggregates

use anyhow::{bail, Result};
use colored::Colorize;

use super::get_context;
use crate::output;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;

    let Some(user) = ctx.store.user() else {
        bail!("Not signed in. Run 'sukh login' first.");
    };

    let summary = ctx.summary.summarize(&ctx.store);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let currency = &ctx.config.currency_symbol;

    println!("{}", "Wallet Status".bold());
    println!();

    let mut table = output::create_table();
    table.add_row(vec!["Account holder".to_string(), user.name.clone()]);
    table.add_row(vec!["Wallet".to_string(), user.wallet_name.clone()]);
    table.add_row(vec![
        "Balance".to_string(),
        output::format_amount(&user.balance, currency),
    ]);
    table.add_row(vec!["Cards".to_string(), summary.card_count.to_string()]);
    table.add_row(vec![
        "Transactions".to_string(),
        summary.transaction_count.to_string(),
    ]);
    table.add_row(vec![
        "This month in".to_string(),
        output::format_amount(&summary.monthly_income, currency),
    ]);
    table.add_row(vec![
        "This month out".to_string(),
        output::format_amount(&summary.monthly_spending, currency),
    ]);
    println!("{}", table);

    if !summary.top_categories.is_empty() {
        println!();
        println!("{}", "Top Spending Categories".bold());
        for entry in &summary.top_categories {
            println!(
                "  • {} - {}",
                entry.category,
                output::format_amount(&entry.amount, currency)
            );
        }
    }

    Ok(())
}

//! Receipt command - write a receipt for a past transaction

use anyhow::{bail, Result};

use super::get_context;
use sukhbank_core::services::write_receipt;

pub fn run(id: &str) -> Result<()> {
    let ctx = get_context()?;

    let Some(user) = ctx.store.user() else {
        bail!("Not signed in. Run 'sukh login' first.");
    };

    let Some(transaction) = ctx
        .store
        .transactions()
        .iter()
        .find(|t| t.id.to_string().starts_with(id))
    else {
        bail!("No transaction matches id '{}'", id);
    };

    let path = write_receipt(
        &ctx.receipt_dir(),
        transaction,
        &user.name,
        &ctx.config.currency_symbol,
    )?;
    let _ = ctx.events.log_command("receipt");
    println!("Receipt written to {}", path.display());
    Ok(())
}

//! Config command - view and change app settings

use anyhow::Result;

use super::get_data_dir;
use crate::output;
use sukhbank_core::config::Config;

pub fn run(currency: Option<String>, auto_receipt: Option<bool>) -> Result<()> {
    let data_dir = get_data_dir();
    std::fs::create_dir_all(&data_dir)?;
    let mut config = Config::load(&data_dir)?;

    if currency.is_none() && auto_receipt.is_none() {
        println!("Currency symbol: {}", config.currency_symbol);
        println!("Auto receipt:    {}", config.auto_receipt);
        return Ok(());
    }

    if let Some(symbol) = currency {
        config.currency_symbol = symbol;
    }
    if let Some(auto) = auto_receipt {
        config.auto_receipt = auto;
    }

    config.save(&data_dir)?;
    output::success("Settings updated");
    Ok(())
}

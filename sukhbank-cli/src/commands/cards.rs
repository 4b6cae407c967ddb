//! Cards command - list, add and block cards

use anyhow::{bail, Result};
use clap::Subcommand;
use colored::Colorize;
use uuid::Uuid;

use super::get_context;
use crate::output;
use sukhbank_core::{CardNetwork, SukhbankContext};

#[derive(Subcommand)]
pub enum CardCommands {
    /// List cards in the wallet
    List,
    /// Add a new card with fabricated details
    Add {
        /// Display name for the card
        #[arg(long, default_value = "Sukh Card")]
        name: String,
        /// Card network (visa, master, rupay)
        #[arg(long, default_value = "visa")]
        network: String,
    },
    /// Toggle the block flag on a card
    Block {
        /// Card id (full or unique prefix)
        id: String,
    },
}

pub fn run(command: Option<CardCommands>) -> Result<()> {
    let mut ctx = get_context()?;

    if !ctx.store.is_authenticated() {
        bail!("Not signed in. Run 'sukh login' first.");
    }

    match command.unwrap_or(CardCommands::List) {
        CardCommands::List => {
            let mut table = output::create_table();
            table.set_header(vec!["ID", "Name", "Number", "Expiry", "Network", "Status"]);
            for card in ctx.store.cards() {
                let status = if card.blocked {
                    "BLOCKED".red().to_string()
                } else {
                    "Active".green().to_string()
                };
                table.add_row(vec![
                    card.id.to_string()[..8].to_string(),
                    card.name.clone(),
                    card.masked_number(),
                    card.expiry.clone(),
                    card.network.to_string(),
                    status,
                ]);
            }
            println!("{}", table);
            Ok(())
        }
        CardCommands::Add { name, network } => {
            let network: CardNetwork = network.parse()?;
            let card = ctx.cards.issue(&mut ctx.store, name, network)?;
            let _ = ctx.events.log_command("cards add");
            output::success(&format!("{} has been added to your wallet", card.name));
            println!("Number: {}", card.masked_number());
            Ok(())
        }
        CardCommands::Block { id } => {
            let Some(card_id) = resolve_card_id(&ctx, &id) else {
                bail!("No card matches id '{}'", id);
            };
            ctx.store.toggle_card_block(card_id)?;
            let _ = ctx.events.log_command("cards block");
            if let Some(card) = ctx.store.cards().iter().find(|c| c.id == card_id) {
                if card.blocked {
                    output::warning(&format!("{} is now blocked", card.name));
                } else {
                    output::success(&format!("{} is now active", card.name));
                }
            }
            Ok(())
        }
    }
}

/// Match a card by full id or unique prefix
fn resolve_card_id(ctx: &SukhbankContext, raw: &str) -> Option<Uuid> {
    if let Ok(id) = raw.parse::<Uuid>() {
        return ctx.store.cards().iter().find(|c| c.id == id).map(|c| c.id);
    }

    let matches: Vec<Uuid> = ctx
        .store
        .cards()
        .iter()
        .filter(|c| c.id.to_string().starts_with(raw))
        .map(|c| c.id)
        .collect();

    match matches.as_slice() {
        [only] => Some(*only),
        _ => None,
    }
}

//! Logs command - inspect recent application events

use anyhow::Result;
use chrono::{DateTime, Utc};

use super::get_context;
use crate::output;

pub fn run(limit: usize, prune_days: Option<i64>) -> Result<()> {
    let ctx = get_context()?;

    if let Some(days) = prune_days {
        let cutoff = Utc::now().timestamp_millis() - days * 24 * 60 * 60 * 1000;
        let removed = ctx.events.delete_before(cutoff)?;
        println!("Pruned {} entries", removed);
    }

    let entries = ctx.events.get_recent(limit)?;

    if entries.is_empty() {
        println!("No events recorded yet");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Time", "Event", "Command", "Error"]);
    for entry in entries {
        let time = DateTime::<Utc>::from_timestamp_millis(entry.timestamp)
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| entry.timestamp.to_string());
        table.add_row(vec![
            time,
            entry.event,
            entry.command.unwrap_or_default(),
            entry.error_message.unwrap_or_default(),
        ]);
    }
    println!("{}", table);
    Ok(())
}

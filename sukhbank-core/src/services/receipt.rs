//! Receipt rendering - plain-text transaction receipts

use std::path::{Path, PathBuf};

use crate::domain::result::Result;
use crate::domain::{Direction, Transaction};

/// Render the receipt body for a transaction
pub fn render_receipt(
    transaction: &Transaction,
    holder_name: &str,
    currency_symbol: &str,
) -> String {
    let kind = match transaction.direction {
        Direction::Debit => "Money Sent",
        Direction::Credit => "Money Received",
    };
    let counterparty_label = match transaction.direction {
        Direction::Debit => "Recipient",
        Direction::Credit => "Sender",
    };
    let status = format!("{:?}", transaction.status).to_uppercase();

    let details = [
        ("Transaction ID", transaction.id.to_string()),
        (
            "Date & Time",
            transaction
                .date
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
        ),
        ("Transaction Type", kind.to_string()),
        (
            "Amount",
            format!("{}{}", currency_symbol, transaction.amount),
        ),
        (counterparty_label, transaction.recipient.clone()),
        ("Account", transaction.recipient_account.clone()),
        ("Category", transaction.category.clone()),
        ("Status", status),
        (
            "Safety Score",
            format!("{}/100", transaction.safety_score.unwrap_or(100)),
        ),
    ];

    let mut out = String::new();
    out.push_str("==========================================\n");
    out.push_str("            SUKH SECURE BANK\n");
    out.push_str("       Official Transaction Receipt\n");
    out.push_str("==========================================\n\n");
    out.push_str(&format!("Issued to: {}\n\n", holder_name));
    for (label, value) in &details {
        out.push_str(&format!("{:<18} {}\n", format!("{}:", label), value));
    }
    out.push_str("\n------------------------------------------\n");
    out.push_str("This is a digitally generated receipt.\n");
    out.push_str("Transaction verified with 2FA and biometric authentication.\n");
    out.push_str("For queries: support@sukhbank.com\n");
    out
}

/// Write a receipt file into the given directory, returning its path
pub fn write_receipt(
    dir: &Path,
    transaction: &Transaction,
    holder_name: &str,
    currency_symbol: &str,
) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(format!("receipt_{}.txt", transaction.id));
    std::fs::write(&path, render_receipt(transaction, holder_name, currency_symbol))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionStatus;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use tempfile::tempdir;
    use uuid::Uuid;

    fn transaction() -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            direction: Direction::Debit,
            amount: Decimal::new(150_000, 2),
            recipient: "Asha".to_string(),
            recipient_account: "asha@upi".to_string(),
            date: Utc::now(),
            category: "Friends".to_string(),
            status: TransactionStatus::Completed,
            safety_score: Some(92),
            description: None,
        }
    }

    #[test]
    fn test_render_contains_all_details() {
        let tx = transaction();
        let body = render_receipt(&tx, "Sukh", "₹");

        assert!(body.contains("SUKH SECURE BANK"));
        assert!(body.contains(&tx.id.to_string()));
        assert!(body.contains("Money Sent"));
        assert!(body.contains("₹1500.00"));
        assert!(body.contains("Recipient:"));
        assert!(body.contains("Asha"));
        assert!(body.contains("COMPLETED"));
        assert!(body.contains("92/100"));
    }

    #[test]
    fn test_credit_is_labelled_as_received() {
        let mut tx = transaction();
        tx.direction = Direction::Credit;

        let body = render_receipt(&tx, "Sukh", "₹");

        assert!(body.contains("Money Received"));
        assert!(body.contains("Sender:"));
    }

    #[test]
    fn test_write_receipt_creates_file() {
        let dir = tempdir().unwrap();
        let tx = transaction();

        let path = write_receipt(dir.path(), &tx, "Sukh", "₹").unwrap();

        assert!(path.exists());
        let body = std::fs::read_to_string(path).unwrap();
        assert!(body.contains(&tx.id.to_string()));
    }
}

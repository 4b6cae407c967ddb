//! Transaction domain model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of money movement relative to the wallet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Debit,
    Credit,
}

/// Settlement status; transfers in this simulation always complete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

/// A single wallet transaction
///
/// Immutable once created. The store keeps the list ordered newest-first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub direction: Direction,
    pub amount: Decimal,
    pub recipient: String,
    pub recipient_account: String,
    pub date: DateTime<Utc>,
    pub category: String,
    pub status: TransactionStatus,
    /// Fabricated 0-100 fraud-risk score attached by the transfer flow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Transaction {
    /// Balance delta this transaction applies to the wallet
    pub fn signed_amount(&self) -> Decimal {
        match self.direction {
            Direction::Debit => -self.amount,
            Direction::Credit => self.amount,
        }
    }
}

/// Transaction fields supplied by the caller; the store assigns id and date
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub direction: Direction,
    pub amount: Decimal,
    pub recipient: String,
    pub recipient_account: String,
    pub category: String,
    pub status: TransactionStatus,
    pub safety_score: Option<u8>,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transaction(direction: Direction, amount: Decimal) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            direction,
            amount,
            recipient: "Shop".to_string(),
            recipient_account: "shop@upi".to_string(),
            date: Utc::now(),
            category: "Shopping".to_string(),
            status: TransactionStatus::Completed,
            safety_score: Some(95),
            description: None,
        }
    }

    #[test]
    fn test_signed_amount() {
        let debit = transaction(Direction::Debit, Decimal::new(120_000, 2));
        let credit = transaction(Direction::Credit, Decimal::new(120_000, 2));

        assert_eq!(debit.signed_amount(), Decimal::new(-120_000, 2));
        assert_eq!(credit.signed_amount(), Decimal::new(120_000, 2));
    }

    #[test]
    fn test_serde_round_trip_reconstructs_date() {
        let original = transaction(Direction::Debit, Decimal::new(50_000, 2));
        let raw = serde_json::to_string(&original).unwrap();
        let parsed: Transaction = serde_json::from_str(&raw).unwrap();

        assert_eq!(parsed, original);
        assert_eq!(parsed.date, original.date);
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let raw = r#"{
            "id": "5f1c9d2e-8a1b-4c3d-9e4f-0a1b2c3d4e5f",
            "direction": "credit",
            "amount": "25000",
            "recipient": "Salary",
            "recipient_account": "COMPANY001",
            "date": "2025-08-01T09:30:00Z",
            "category": "Income",
            "status": "completed"
        }"#;
        let parsed: Transaction = serde_json::from_str(raw).unwrap();

        assert_eq!(parsed.direction, Direction::Credit);
        assert!(parsed.safety_score.is_none());
        assert!(parsed.description.is_none());
    }
}

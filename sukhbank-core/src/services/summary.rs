//! Summary service - dashboard aggregates over the store

use std::collections::HashMap;

use chrono::{Datelike, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::Direction;
use crate::store::BankingStore;

/// Aggregates shown on the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct AccountSummary {
    pub wallet_name: Option<String>,
    pub balance: Option<Decimal>,
    pub monthly_income: Decimal,
    pub monthly_spending: Decimal,
    pub top_categories: Vec<CategorySpend>,
    pub card_count: usize,
    pub transaction_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategorySpend {
    pub category: String,
    pub amount: Decimal,
}

#[derive(Debug, Default)]
pub struct SummaryService;

impl SummaryService {
    pub fn new() -> Self {
        Self
    }

    /// Compute dashboard aggregates
    ///
    /// Income and spending cover the current calendar month; the category
    /// breakdown covers all debits and keeps the top three.
    pub fn summarize(&self, store: &BankingStore) -> AccountSummary {
        let now = Utc::now();

        let mut monthly_income = Decimal::ZERO;
        let mut monthly_spending = Decimal::ZERO;
        let mut by_category: HashMap<String, Decimal> = HashMap::new();

        for tx in store.transactions() {
            if tx.date.year() == now.year() && tx.date.month() == now.month() {
                match tx.direction {
                    Direction::Credit => monthly_income += tx.amount,
                    Direction::Debit => monthly_spending += tx.amount,
                }
            }
            if tx.direction == Direction::Debit {
                *by_category
                    .entry(tx.category.clone())
                    .or_insert(Decimal::ZERO) += tx.amount;
            }
        }

        let mut top_categories: Vec<CategorySpend> = by_category
            .into_iter()
            .map(|(category, amount)| CategorySpend { category, amount })
            .collect();
        top_categories.sort_by(|a, b| b.amount.cmp(&a.amount));
        top_categories.truncate(3);

        AccountSummary {
            wallet_name: store.user().map(|u| u.wallet_name.clone()),
            balance: store.user().map(|u| u.balance),
            monthly_income,
            monthly_spending,
            top_categories,
            card_count: store.cards().len(),
            transaction_count: store.transactions().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStore;
    use crate::domain::{NewTransaction, TransactionStatus};

    fn entry(direction: Direction, amount: i64, category: &str) -> NewTransaction {
        NewTransaction {
            direction,
            amount: Decimal::new(amount, 2),
            recipient: "Someone".to_string(),
            recipient_account: "someone@upi".to_string(),
            category: category.to_string(),
            status: TransactionStatus::Completed,
            safety_score: None,
            description: None,
        }
    }

    #[test]
    fn test_summary_totals_current_month() {
        let mut store = BankingStore::load(Box::new(MemoryStore::new())).unwrap();
        store.login("a@b.com", "pw").unwrap();

        // Recorded now, so always inside the current month
        store
            .add_transaction(entry(Direction::Debit, 30_000, "Food"))
            .unwrap();
        store
            .add_transaction(entry(Direction::Credit, 100_000, "Income"))
            .unwrap();

        let summary = SummaryService::new().summarize(&store);

        assert!(summary.monthly_spending >= Decimal::new(30_000, 2));
        assert!(summary.monthly_income >= Decimal::new(100_000, 2));
        assert_eq!(summary.card_count, 2);
        assert_eq!(summary.transaction_count, 5);
        assert_eq!(summary.balance, store.user().map(|u| u.balance));
    }

    #[test]
    fn test_top_categories_ranked_by_spend() {
        let mut store = BankingStore::load(Box::new(MemoryStore::new())).unwrap();
        store.login("a@b.com", "pw").unwrap();

        store
            .add_transaction(entry(Direction::Debit, 900_000, "Rent"))
            .unwrap();
        store
            .add_transaction(entry(Direction::Debit, 10_000, "Coffee"))
            .unwrap();

        let summary = SummaryService::new().summarize(&store);

        assert_eq!(summary.top_categories.len(), 3);
        assert_eq!(summary.top_categories[0].category, "Rent");
    }

    #[test]
    fn test_summary_without_session() {
        let store = BankingStore::load(Box::new(MemoryStore::new())).unwrap();

        let summary = SummaryService::new().summarize(&store);

        assert!(summary.wallet_name.is_none());
        assert!(summary.balance.is_none());
        assert_eq!(summary.transaction_count, 0);
    }
}

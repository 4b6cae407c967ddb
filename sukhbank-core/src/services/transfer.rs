//! Transfer service - the send-money flow with its fabricated safety check

use rust_decimal::Decimal;

use crate::domain::result::{Error, Result};
use crate::domain::{Direction, NewTransaction, Transaction, TransactionStatus};
use crate::ports::SafetyScorer;
use crate::store::BankingStore;

/// A money-transfer request from the UI layer
#[derive(Debug, Clone)]
pub struct TransferRequest {
    pub recipient: String,
    pub recipient_account: String,
    pub amount: Decimal,
    pub category: String,
    pub description: Option<String>,
    /// Score from a prior safety check; 100 is assumed when absent
    pub safety_score: Option<u8>,
}

pub struct TransferService {
    scorer: Box<dyn SafetyScorer>,
}

impl TransferService {
    pub fn new(scorer: Box<dyn SafetyScorer>) -> Self {
        Self { scorer }
    }

    /// Run the fabricated fraud check for a recipient account
    pub fn check_safety(&self, recipient_account: &str) -> u8 {
        self.scorer.score(recipient_account)
    }

    /// Validate and record a completed debit through the store
    pub fn send(&self, store: &mut BankingStore, request: TransferRequest) -> Result<Transaction> {
        if request.recipient.is_empty()
            || request.recipient_account.is_empty()
            || request.category.is_empty()
        {
            return Err(Error::validation("all transfer fields are required"));
        }

        let balance = store
            .user()
            .map(|u| u.balance)
            .ok_or_else(|| Error::validation("no user is signed in"))?;

        if request.amount <= Decimal::ZERO || request.amount > balance {
            return Err(Error::validation("invalid amount"));
        }

        store.add_transaction(NewTransaction {
            direction: Direction::Debit,
            amount: request.amount,
            recipient: request.recipient,
            recipient_account: request.recipient_account,
            category: request.category,
            status: TransactionStatus::Completed,
            safety_score: Some(request.safety_score.unwrap_or(100)),
            description: request.description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FixedScorer, MemoryStore};

    fn logged_in_store() -> BankingStore {
        let mut store = BankingStore::load(Box::new(MemoryStore::new())).unwrap();
        assert!(store.login("a@b.com", "pw").unwrap());
        store
    }

    fn service() -> TransferService {
        TransferService::new(Box::new(FixedScorer(88)))
    }

    fn request(amount: Decimal) -> TransferRequest {
        TransferRequest {
            recipient: "Asha".to_string(),
            recipient_account: "asha@upi".to_string(),
            amount,
            category: "Friends".to_string(),
            description: None,
            safety_score: Some(88),
        }
    }

    #[test]
    fn test_check_safety_uses_the_injected_scorer() {
        assert_eq!(service().check_safety("anyone@upi"), 88);
    }

    #[test]
    fn test_send_records_a_completed_debit() {
        let mut store = logged_in_store();
        let before = store.user().unwrap().balance;

        let tx = service()
            .send(&mut store, request(Decimal::new(50_000, 2)))
            .unwrap();

        assert_eq!(tx.direction, Direction::Debit);
        assert_eq!(tx.status, TransactionStatus::Completed);
        assert_eq!(tx.safety_score, Some(88));
        assert_eq!(
            store.user().unwrap().balance,
            before - Decimal::new(50_000, 2)
        );
        assert_eq!(store.transactions()[0].id, tx.id);
    }

    #[test]
    fn test_send_defaults_missing_score_to_100() {
        let mut store = logged_in_store();
        let mut req = request(Decimal::new(10_000, 2));
        req.safety_score = None;

        let tx = service().send(&mut store, req).unwrap();

        assert_eq!(tx.safety_score, Some(100));
    }

    #[test]
    fn test_send_rejects_missing_fields() {
        let mut store = logged_in_store();
        let mut req = request(Decimal::new(10_000, 2));
        req.recipient = String::new();

        let result = service().send(&mut store, req);

        assert!(matches!(result, Err(Error::Validation(_))));
        assert_eq!(store.transactions().len(), 3);
    }

    #[test]
    fn test_send_rejects_non_positive_amount() {
        let mut store = logged_in_store();

        let result = service().send(&mut store, request(Decimal::ZERO));

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_send_rejects_amount_over_balance() {
        let mut store = logged_in_store();
        let over = store.user().unwrap().balance + Decimal::new(1, 2);

        let result = service().send(&mut store, request(over));

        assert!(matches!(result, Err(Error::Validation(_))));
        assert_eq!(store.transactions().len(), 3);
    }

    #[test]
    fn test_send_requires_a_session() {
        let mut store = BankingStore::load(Box::new(MemoryStore::new())).unwrap();

        let result = service().send(&mut store, request(Decimal::new(10_000, 2)));

        assert!(matches!(result, Err(Error::Validation(_))));
    }
}

//! Banking state store
//!
//! Single source of truth for the signed-in user, cards, transactions and
//! the two security preference flags. Every mutating operation ends with an
//! explicit persistence call for the state shapes it touched; the five
//! entries are written independently, so there is no consistency boundary
//! across them.

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::result::Result;
use crate::domain::{
    Card, CardNetwork, Direction, NewCard, NewTransaction, Transaction, TransactionStatus, User,
};
use crate::ports::KeyValueStore;

/// Wire keys for the five persisted entries
pub const USER_KEY: &str = "sukh_bank_user";
pub const CARDS_KEY: &str = "sukh_bank_cards";
pub const TRANSACTIONS_KEY: &str = "sukh_bank_transactions";
pub const TWO_FACTOR_KEY: &str = "sukh_bank_2fa";
pub const BIOMETRIC_KEY: &str = "sukh_bank_biometric";

/// The banking state store
///
/// Owns the durable storage handle; there is exactly one logical writer, so
/// no locking is involved.
pub struct BankingStore {
    user: Option<User>,
    authenticated: bool,
    two_factor_enabled: bool,
    biometric_enabled: bool,
    cards: Vec<Card>,
    transactions: Vec<Transaction>,
    storage: Box<dyn KeyValueStore>,
}

impl BankingStore {
    /// Rehydrate the store from the five persisted entries
    ///
    /// A malformed entry is discarded rather than propagated; only storage
    /// I/O failures surface as errors. A present user entry marks the
    /// session authenticated.
    pub fn load(storage: Box<dyn KeyValueStore>) -> Result<Self> {
        let user: Option<User> = read_entry(storage.as_ref(), USER_KEY)?;
        let cards: Vec<Card> = read_entry(storage.as_ref(), CARDS_KEY)?.unwrap_or_default();
        let transactions: Vec<Transaction> =
            read_entry(storage.as_ref(), TRANSACTIONS_KEY)?.unwrap_or_default();
        let two_factor_enabled: bool =
            read_entry(storage.as_ref(), TWO_FACTOR_KEY)?.unwrap_or(false);
        let biometric_enabled: bool =
            read_entry(storage.as_ref(), BIOMETRIC_KEY)?.unwrap_or(false);

        Ok(Self {
            authenticated: user.is_some(),
            user,
            two_factor_enabled,
            biometric_enabled,
            cards,
            transactions,
            storage,
        })
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn two_factor_enabled(&self) -> bool {
        self.two_factor_enabled
    }

    pub fn biometric_enabled(&self) -> bool {
        self.biometric_enabled
    }

    /// Simulated sign-in: any non-empty credential pair is accepted
    ///
    /// Returns `Ok(false)` without touching state when either input is
    /// empty. On success the fixed-shape demo profile is installed and,
    /// when the respective lists are empty, the default cards and sample
    /// transactions are seeded.
    pub fn login(&mut self, email: &str, password: &str) -> Result<bool> {
        if email.is_empty() || password.is_empty() {
            return Ok(false);
        }

        self.user = Some(User::demo_profile(email));
        self.authenticated = true;

        if self.cards.is_empty() {
            self.cards = default_cards();
            self.persist_cards()?;
        }
        if self.transactions.is_empty() {
            self.transactions = sample_transactions();
            self.persist_transactions()?;
        }
        self.persist_user()?;

        Ok(true)
    }

    /// Clear the session
    ///
    /// The persisted user entry is removed; cards, transactions and the
    /// preference flags stay persisted.
    pub fn logout(&mut self) -> Result<()> {
        self.user = None;
        self.authenticated = false;
        self.storage.remove(USER_KEY)
    }

    /// Record a transaction and apply its balance delta in one operation
    ///
    /// The record is assigned a fresh id and the current timestamp, then
    /// prepended so the list stays newest-first.
    pub fn add_transaction(&mut self, new: NewTransaction) -> Result<Transaction> {
        let transaction = Transaction {
            id: Uuid::new_v4(),
            direction: new.direction,
            amount: new.amount,
            recipient: new.recipient,
            recipient_account: new.recipient_account,
            date: Utc::now(),
            category: new.category,
            status: new.status,
            safety_score: new.safety_score,
            description: new.description,
        };

        self.transactions.insert(0, transaction.clone());
        self.persist_transactions()?;

        self.update_balance(transaction.signed_amount())?;

        Ok(transaction)
    }

    /// Append a card with a freshly assigned id
    pub fn add_card(&mut self, new: NewCard) -> Result<Card> {
        let card = Card {
            id: Uuid::new_v4(),
            name: new.name,
            number: new.number,
            expiry: new.expiry,
            cvv: new.cvv,
            network: new.network,
            blocked: new.blocked,
        };

        self.cards.push(card.clone());
        self.persist_cards()?;

        Ok(card)
    }

    /// Flip the blocked flag of the matching card; unknown ids are ignored
    pub fn toggle_card_block(&mut self, card_id: Uuid) -> Result<()> {
        if let Some(card) = self.cards.iter_mut().find(|c| c.id == card_id) {
            card.blocked = !card.blocked;
            self.persist_cards()?;
        }
        Ok(())
    }

    /// Add a delta to the current balance; a no-op with no user loaded
    pub fn update_balance(&mut self, delta: Decimal) -> Result<()> {
        if let Some(user) = &mut self.user {
            user.balance += delta;
            self.persist_user()?;
        }
        Ok(())
    }

    /// Turn on two-factor authentication; idempotent
    pub fn enable_two_factor(&mut self) -> Result<()> {
        self.two_factor_enabled = true;
        self.persist_two_factor()
    }

    /// Turn on biometric verification; idempotent
    pub fn enable_biometric(&mut self) -> Result<()> {
        self.biometric_enabled = true;
        self.persist_biometric()
    }

    fn persist_user(&mut self) -> Result<()> {
        match &self.user {
            Some(user) => {
                let raw = serde_json::to_string(user)?;
                self.storage.set(USER_KEY, &raw)
            }
            None => self.storage.remove(USER_KEY),
        }
    }

    fn persist_cards(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.cards)?;
        self.storage.set(CARDS_KEY, &raw)
    }

    fn persist_transactions(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.transactions)?;
        self.storage.set(TRANSACTIONS_KEY, &raw)
    }

    fn persist_two_factor(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.two_factor_enabled)?;
        self.storage.set(TWO_FACTOR_KEY, &raw)
    }

    fn persist_biometric(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.biometric_enabled)?;
        self.storage.set(BIOMETRIC_KEY, &raw)
    }
}

fn read_entry<T: serde::de::DeserializeOwned>(
    storage: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>> {
    let raw = match storage.get(key)? {
        Some(raw) => raw,
        None => return Ok(None),
    };
    // Corrupt entries fail closed: treated as absent
    Ok(serde_json::from_str(&raw).ok())
}

/// The two default cards seeded on first login
fn default_cards() -> Vec<Card> {
    vec![
        Card {
            id: Uuid::new_v4(),
            name: "Sukh Card".to_string(),
            number: "4532 1234 5678 9010".to_string(),
            expiry: "12/26".to_string(),
            cvv: "123".to_string(),
            network: CardNetwork::Visa,
            blocked: false,
        },
        Card {
            id: Uuid::new_v4(),
            name: "Sukh Premium".to_string(),
            number: "5412 9876 5432 1098".to_string(),
            expiry: "09/27".to_string(),
            cvv: "456".to_string(),
            network: CardNetwork::Master,
            blocked: false,
        },
    ]
}

/// Three sample transactions dated 1, 3 and 5 days back, newest first
fn sample_transactions() -> Vec<Transaction> {
    let now = Utc::now();

    vec![
        Transaction {
            id: Uuid::new_v4(),
            direction: Direction::Debit,
            amount: Decimal::new(50_000, 2), // 500.00
            recipient: "Swiggy".to_string(),
            recipient_account: "swiggy@paytm".to_string(),
            date: now - Duration::days(1),
            category: "Food".to_string(),
            status: TransactionStatus::Completed,
            safety_score: Some(98),
            description: None,
        },
        Transaction {
            id: Uuid::new_v4(),
            direction: Direction::Debit,
            amount: Decimal::new(120_000, 2), // 1,200.00
            recipient: "Amazon".to_string(),
            recipient_account: "amazon@upi".to_string(),
            date: now - Duration::days(3),
            category: "Shopping".to_string(),
            status: TransactionStatus::Completed,
            safety_score: Some(95),
            description: None,
        },
        Transaction {
            id: Uuid::new_v4(),
            direction: Direction::Credit,
            amount: Decimal::new(2_500_000, 2), // 25,000.00
            recipient: "Salary".to_string(),
            recipient_account: "COMPANY001".to_string(),
            date: now - Duration::days(5),
            category: "Income".to_string(),
            status: TransactionStatus::Completed,
            safety_score: Some(100),
            description: None,
        },
    ]
}

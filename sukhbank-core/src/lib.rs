//! Sukhbank Core - business logic for a simulated consumer bank
//!
//! This crate implements the core domain logic following hexagonal
//! architecture:
//!
//! - **domain**: Core business entities (User, Card, Transaction)
//! - **ports**: Trait definitions for external dependencies (KeyValueStore,
//!   SafetyScorer, StepUpVerifier)
//! - **services**: Business logic orchestration
//! - **adapters**: Concrete implementations (JSON file store, heuristic
//!   scorer, demo verifier)
//!
//! Nothing here talks to a real bank: authentication, fraud scoring and
//! money movement are all simulated in process.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;
pub mod store;

use std::path::{Path, PathBuf};

use anyhow::Result;

use adapters::{DemoVerifier, HeuristicScorer, JsonFileStore};
use config::Config;
use services::{AuthService, CardService, EventLog, SummaryService, TransferService};
use store::BankingStore;

// Re-export commonly used types at crate root
pub use domain::result::Error;
pub use domain::{
    Card, CardNetwork, Direction, NewCard, NewTransaction, Transaction, TransactionStatus, User,
};
pub use services::{AccountSummary, LogEvent, TransferRequest};

/// Main context for Sukhbank operations
///
/// The primary entry point for callers: wires configuration, the banking
/// store over its storage adapter, the default scoring and verification
/// adapters, and the event log. Constructed explicitly and passed by
/// reference; there is no ambient instance.
pub struct SukhbankContext {
    pub config: Config,
    pub store: BankingStore,
    pub auth: AuthService,
    pub transfers: TransferService,
    pub cards: CardService,
    pub summary: SummaryService,
    pub events: EventLog,
    data_dir: PathBuf,
}

impl SukhbankContext {
    /// Create a new context rooted at the given data directory
    pub fn new(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir)?;

        let config = Config::load(data_dir)?;
        let storage = JsonFileStore::new(data_dir)?;
        let store = BankingStore::load(Box::new(storage))?;
        let events = EventLog::new(data_dir, env!("CARGO_PKG_VERSION"))?;

        Ok(Self {
            config,
            store,
            auth: AuthService::new(Box::new(DemoVerifier::new())),
            transfers: TransferService::new(Box::new(HeuristicScorer::new())),
            cards: CardService::new(),
            summary: SummaryService::new(),
            events,
            data_dir: data_dir.to_path_buf(),
        })
    }

    /// Directory receipts are written into
    pub fn receipt_dir(&self) -> PathBuf {
        self.data_dir.join("receipts")
    }
}

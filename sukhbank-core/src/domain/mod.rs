//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with validation logic - no I/O or external dependencies.

mod card;
mod transaction;
mod user;
pub mod result;

pub use card::{Card, CardNetwork, NewCard};
pub use transaction::{Direction, NewTransaction, Transaction, TransactionStatus};
pub use user::User;

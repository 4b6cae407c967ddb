//! User domain model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The signed-in account holder
///
/// Created on login, cleared on logout. The profile has a fixed shape:
/// only the email varies between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub balance: Decimal,
    pub wallet_name: String,
}

impl User {
    /// Build the demo profile for a fresh session
    pub fn demo_profile(email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: "Sukh".to_string(),
            email: email.into(),
            mobile: "+91 98765 43210".to_string(),
            balance: Decimal::new(12_500_050, 2), // 125,000.50
            wallet_name: "Sukh Wallet".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_profile_varies_only_by_email() {
        let a = User::demo_profile("a@example.com");
        let b = User::demo_profile("b@example.com");

        assert_eq!(a.email, "a@example.com");
        assert_eq!(b.email, "b@example.com");
        assert_eq!(a.name, b.name);
        assert_eq!(a.balance, b.balance);
        assert_eq!(a.balance, Decimal::new(12_500_050, 2));
    }
}

//! Card domain model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::result::Error;

/// Card network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardNetwork {
    Visa,
    Master,
    RuPay,
}

impl CardNetwork {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardNetwork::Visa => "Visa",
            CardNetwork::Master => "Master",
            CardNetwork::RuPay => "RuPay",
        }
    }
}

impl std::fmt::Display for CardNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CardNetwork {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "visa" => Ok(CardNetwork::Visa),
            "master" | "mastercard" => Ok(CardNetwork::Master),
            "rupay" => Ok(CardNetwork::RuPay),
            other => Err(Error::validation(format!("unknown card network: {}", other))),
        }
    }
}

/// A payment card in the user's wallet
///
/// Cards are never deleted; blocking flips a flag and leaves the record in
/// place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: Uuid,
    pub name: String,
    /// Display-formatted number, four space-separated groups
    pub number: String,
    pub expiry: String,
    pub cvv: String,
    pub network: CardNetwork,
    pub blocked: bool,
}

impl Card {
    /// Masked rendering for list views, keeping only the last group
    pub fn masked_number(&self) -> String {
        match self.number.rsplit(' ').next() {
            Some(last) => format!("•••• •••• •••• {}", last),
            None => self.number.clone(),
        }
    }
}

/// Card fields supplied by the caller; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewCard {
    pub name: String,
    pub number: String,
    pub expiry: String,
    pub cvv: String,
    pub network: CardNetwork,
    pub blocked: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_number_keeps_last_group() {
        let card = Card {
            id: Uuid::new_v4(),
            name: "Test".to_string(),
            number: "4532 1234 5678 9010".to_string(),
            expiry: "12/26".to_string(),
            cvv: "123".to_string(),
            network: CardNetwork::Visa,
            blocked: false,
        };

        assert_eq!(card.masked_number(), "•••• •••• •••• 9010");
    }

    #[test]
    fn test_network_parsing() {
        assert_eq!("visa".parse::<CardNetwork>().unwrap(), CardNetwork::Visa);
        assert_eq!("Master".parse::<CardNetwork>().unwrap(), CardNetwork::Master);
        assert_eq!("RUPAY".parse::<CardNetwork>().unwrap(), CardNetwork::RuPay);
        assert!("amex".parse::<CardNetwork>().is_err());
    }
}

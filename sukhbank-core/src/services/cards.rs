//! Card service - issuing fabricated demo cards

use rand::Rng;

use crate::domain::result::Result;
use crate::domain::{Card, CardNetwork, NewCard};
use crate::store::BankingStore;

/// Expiry printed on every newly issued card
const ISSUE_EXPIRY: &str = "12/28";

#[derive(Debug, Default)]
pub struct CardService;

impl CardService {
    pub fn new() -> Self {
        Self
    }

    /// Issue a new unblocked card with a fabricated number and CVV
    pub fn issue(
        &self,
        store: &mut BankingStore,
        name: impl Into<String>,
        network: CardNetwork,
    ) -> Result<Card> {
        store.add_card(NewCard {
            name: name.into(),
            number: fabricate_number(),
            expiry: ISSUE_EXPIRY.to_string(),
            cvv: fabricate_cvv(),
            network,
            blocked: false,
        })
    }
}

/// Sixteen random digits in four display groups
fn fabricate_number() -> String {
    let mut rng = rand::thread_rng();
    let groups: Vec<String> = (0..4)
        .map(|_| rng.gen_range(1000..10000).to_string())
        .collect();
    groups.join(" ")
}

fn fabricate_cvv() -> String {
    rand::thread_rng().gen_range(100..1000).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStore;

    #[test]
    fn test_fabricated_number_has_four_groups_of_four_digits() {
        let number = fabricate_number();
        let groups: Vec<&str> = number.split(' ').collect();

        assert_eq!(groups.len(), 4);
        for group in groups {
            assert_eq!(group.len(), 4);
            assert!(group.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_fabricated_cvv_is_three_digits() {
        let cvv = fabricate_cvv();

        assert_eq!(cvv.len(), 3);
        assert!(cvv.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_issue_appends_an_unblocked_card() {
        let mut store = BankingStore::load(Box::new(MemoryStore::new())).unwrap();
        store.login("a@b.com", "pw").unwrap();
        let count = store.cards().len();

        let card = CardService::new()
            .issue(&mut store, "Travel Card", CardNetwork::RuPay)
            .unwrap();

        assert_eq!(store.cards().len(), count + 1);
        assert_eq!(card.name, "Travel Card");
        assert_eq!(card.network, CardNetwork::RuPay);
        assert_eq!(card.expiry, ISSUE_EXPIRY);
        assert!(!card.blocked);
    }
}

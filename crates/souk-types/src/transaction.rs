use std::fmt;

use serde::{Deserialize, Serialize};

use crate::item::Item;

/// An immutable record of a completed purchase.
///
/// `item` is a value snapshot taken right after the purchase decremented the
/// stock, so it reflects the item as it stood at that moment (its quantity
/// may read 0 when the purchase exhausted the stock). Later inventory edits
/// never reach back into recorded transactions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub buyer: String,
    pub item: Item,
    pub quantity: u32,
}

impl Transaction {
    pub fn new(buyer: impl Into<String>, item: Item, quantity: u32) -> Self {
        Self {
            buyer: buyer.into(),
            item,
            quantity,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "buyer: {}, item: {}, quantity: {}",
            self.buyer, self.item.name, self.quantity
        )
    }
}

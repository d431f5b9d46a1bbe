use std::fmt;

use serde::{Deserialize, Serialize};

/// A unit of inventory.
///
/// The name is the lookup key for edit, delete, and purchase; nothing stops
/// two items from sharing a name, in which case name-keyed operations affect
/// the first match in insertion order. Price and quantity are unsigned so
/// they can never go negative.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub price: u64,
    pub quantity: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, price: u64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name: {}, price: {}, quantity: {}",
            self.name, self.price, self.quantity
        )
    }
}

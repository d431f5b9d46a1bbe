use souk_types::Item;

use crate::error::{InventoryError, InventoryResult};

/// The ordered item collection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild an inventory from restored items, preserving order.
    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Consume the inventory, yielding the items in order.
    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// All items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a new item. No uniqueness check: a second item with the same
    /// name simply sits behind the first for every name-keyed operation.
    pub fn add(&mut self, name: &str, price: u64, quantity: u32) -> Item {
        let item = Item::new(name, price, quantity);
        self.items.push(item.clone());
        item
    }

    /// Replace every field of the first item named `old_name`.
    pub fn edit(
        &mut self,
        old_name: &str,
        new_name: &str,
        price: u64,
        quantity: u32,
    ) -> InventoryResult<()> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.name == old_name)
            .ok_or_else(|| InventoryError::NotFound {
                name: old_name.to_string(),
            })?;
        item.name = new_name.to_string();
        item.price = price;
        item.quantity = quantity;
        Ok(())
    }

    /// Remove the first item with the given name.
    pub fn remove(&mut self, name: &str) -> InventoryResult<()> {
        let position = self.position_of(name)?;
        self.items.remove(position);
        Ok(())
    }

    /// Take `quantity` units of the first item with the given name.
    ///
    /// On success the stock is decremented in place and the item is dropped
    /// from the collection when the decrement lands exactly on zero. The
    /// returned snapshot is the item as it stood right after the decrement
    /// (so its quantity reads 0 for an exhausting purchase) and is what the
    /// ledger records.
    ///
    /// A failed purchase leaves the inventory untouched.
    pub fn purchase(&mut self, name: &str, quantity: u32) -> InventoryResult<Item> {
        if quantity == 0 {
            return Err(InventoryError::InvalidQuantity);
        }

        let position = self.position_of(name)?;
        let item = &mut self.items[position];
        if quantity > item.quantity {
            return Err(InventoryError::InsufficientStock {
                name: name.to_string(),
                requested: quantity,
                available: item.quantity,
            });
        }

        item.quantity -= quantity;
        let snapshot = item.clone();
        if snapshot.quantity == 0 {
            self.items.remove(position);
        }
        Ok(snapshot)
    }

    fn position_of(&self, name: &str) -> InventoryResult<usize> {
        self.items
            .iter()
            .position(|i| i.name == name)
            .ok_or_else(|| InventoryError::NotFound {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stocked() -> Inventory {
        let mut inventory = Inventory::new();
        inventory.add("Pen", 5, 10);
        inventory.add("Mug", 7, 2);
        inventory
    }

    #[test]
    fn add_appends_in_order() {
        let inventory = stocked();
        let names: Vec<_> = inventory.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Pen", "Mug"]);
    }

    #[test]
    fn add_allows_duplicate_names() {
        let mut inventory = stocked();
        inventory.add("Pen", 9, 1);
        assert_eq!(inventory.len(), 3);
    }

    #[test]
    fn edit_replaces_all_fields_of_first_match() {
        let mut inventory = stocked();
        inventory.edit("Pen", "Fountain Pen", 12, 3).unwrap();
        let item = &inventory.items()[0];
        assert_eq!(item.name, "Fountain Pen");
        assert_eq!(item.price, 12);
        assert_eq!(item.quantity, 3);
    }

    #[test]
    fn edit_missing_item() {
        let mut inventory = stocked();
        let err = inventory.edit("Stapler", "x", 1, 1).unwrap_err();
        assert_eq!(
            err,
            InventoryError::NotFound {
                name: "Stapler".to_string()
            }
        );
    }

    #[test]
    fn edit_to_zero_quantity_keeps_item_listed() {
        // Removal on zero only happens through a purchase.
        let mut inventory = stocked();
        inventory.edit("Mug", "Mug", 7, 0).unwrap();
        assert_eq!(inventory.items()[1].quantity, 0);
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn remove_takes_only_the_first_match() {
        let mut inventory = Inventory::new();
        inventory.add("Pen", 5, 10);
        inventory.add("Pen", 9, 1);
        inventory.remove("Pen").unwrap();
        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory.items()[0].price, 9);
    }

    #[test]
    fn remove_missing_item() {
        let mut inventory = stocked();
        assert!(matches!(
            inventory.remove("Stapler"),
            Err(InventoryError::NotFound { .. })
        ));
    }

    #[test]
    fn purchase_decrements_stock_in_place() {
        let mut inventory = stocked();
        let snapshot = inventory.purchase("Pen", 4).unwrap();
        assert_eq!(snapshot.quantity, 6);
        assert_eq!(inventory.items()[0].quantity, 6);
    }

    #[test]
    fn purchase_exhausting_stock_removes_item() {
        let mut inventory = stocked();
        let snapshot = inventory.purchase("Mug", 2).unwrap();
        // The snapshot shows the post-decrement state, then the item goes.
        assert_eq!(snapshot.quantity, 0);
        assert_eq!(snapshot.name, "Mug");
        assert!(inventory.items().iter().all(|i| i.name != "Mug"));
    }

    #[test]
    fn purchase_insufficient_stock_changes_nothing() {
        let mut inventory = stocked();
        let err = inventory.purchase("Mug", 3).unwrap_err();
        assert_eq!(
            err,
            InventoryError::InsufficientStock {
                name: "Mug".to_string(),
                requested: 3,
                available: 2,
            }
        );
        assert_eq!(inventory.items()[1].quantity, 2);
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn purchase_missing_item() {
        let mut inventory = stocked();
        assert!(matches!(
            inventory.purchase("Stapler", 1),
            Err(InventoryError::NotFound { .. })
        ));
    }

    #[test]
    fn purchase_zero_quantity_rejected() {
        let mut inventory = stocked();
        assert_eq!(
            inventory.purchase("Pen", 0).unwrap_err(),
            InventoryError::InvalidQuantity
        );
        assert_eq!(inventory.items()[0].quantity, 10);
    }

    #[test]
    fn purchase_targets_first_match_among_duplicates() {
        let mut inventory = Inventory::new();
        inventory.add("Pen", 5, 10);
        inventory.add("Pen", 9, 8);
        inventory.purchase("Pen", 10).unwrap();
        // The first Pen is exhausted and removed; the second survives.
        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory.items()[0].price, 9);
        assert_eq!(inventory.items()[0].quantity, 8);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn purchase_arithmetic_holds(initial in 1u32..1000, take in 1u32..1000) {
                let mut inventory = Inventory::new();
                inventory.add("Widget", 3, initial);

                match inventory.purchase("Widget", take) {
                    Ok(snapshot) => {
                        prop_assert!(take <= initial);
                        prop_assert_eq!(snapshot.quantity, initial - take);
                        // Present iff stock remains.
                        prop_assert_eq!(inventory.len(), usize::from(take != initial));
                    }
                    Err(InventoryError::InsufficientStock { requested, available, .. }) => {
                        prop_assert!(take > initial);
                        prop_assert_eq!(requested, take);
                        prop_assert_eq!(available, initial);
                        prop_assert_eq!(inventory.items()[0].quantity, initial);
                    }
                    Err(other) => prop_assert!(false, "unexpected error: {other}"),
                }
            }
        }
    }
}

use serde::{Deserialize, Serialize};

use super::value_objects::ItemId;

// ============================================================================
// Catalog Item Entity
// ============================================================================

/// A catalog item. Immutable once registered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    price: i64,
}

impl Item {
    /// Name and price are accepted as-is: empty names and negative prices
    /// are not rejected.
    pub fn new(id: ItemId, name: impl Into<String>, price: i64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> i64 {
        self.price
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_accessors() {
        let item = Item::new(ItemId(7), "Margherita", 1200);

        assert_eq!(item.id(), ItemId(7));
        assert_eq!(item.name(), "Margherita");
        assert_eq!(item.price(), 1200);
    }

    #[test]
    fn test_item_accepts_unvalidated_input() {
        let item = Item::new(ItemId(1), "", -50);

        assert_eq!(item.name(), "");
        assert_eq!(item.price(), -50);
    }

    #[test]
    fn test_item_serialization() {
        let item = Item::new(ItemId(3), "Fugazzeta", 1500);

        let json = serde_json::to_string(&item).unwrap();
        let deserialized: Item = serde_json::from_str(&json).unwrap();

        assert_eq!(item, deserialized);
    }
}

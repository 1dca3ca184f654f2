use serde::{Deserialize, Serialize};

// ============================================================================
// Catalog Value Objects
// ============================================================================

/// Sequential catalog item identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u64);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mints strictly increasing item identifiers.
///
/// Owned by the aggregate that registers items, so identity assignment is an
/// explicit, local concern rather than a process-wide counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemIdGenerator {
    next_id: u64,
}

impl ItemIdGenerator {
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    pub fn next_id(&mut self) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        id
    }
}

impl Default for ItemIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_starts_at_one() {
        let mut ids = ItemIdGenerator::new();
        assert_eq!(ids.next_id(), ItemId(1));
    }

    #[test]
    fn test_generated_ids_strictly_increase() {
        let mut ids = ItemIdGenerator::new();

        let mut previous = ids.next_id();
        for _ in 0..10 {
            let next = ids.next_id();
            assert!(next > previous);
            previous = next;
        }
    }

    #[test]
    fn test_generators_are_independent() {
        let mut a = ItemIdGenerator::new();
        let mut b = ItemIdGenerator::new();

        a.next_id();
        a.next_id();

        // A fresh generator is not affected by another's history.
        assert_eq!(b.next_id(), ItemId(1));
    }
}

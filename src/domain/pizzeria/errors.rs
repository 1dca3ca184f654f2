use crate::domain::catalog::ItemId;

// ============================================================================
// Pizzeria Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum PizzeriaError {
    #[error("customer index {index} is out of range ({len} customers)")]
    CustomerOutOfRange { index: usize, len: usize },

    #[error("item index {index} is out of range ({len} catalog items)")]
    ItemOutOfRange { index: usize, len: usize },

    #[error("item {0} is not in the catalog")]
    UnknownItem(ItemId),
}

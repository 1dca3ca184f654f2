// ============================================================================
// Catalog Domain - Items Offered by the Pizzeria
// ============================================================================
//
// This module contains all catalog-specific code:
// - Value objects (ItemId, ItemIdGenerator)
// - Item entity
//
// Items are shared, immutable catalog entries; orders reference them by id
// and snapshot what they need at placement time.
//
// ============================================================================

pub mod item;
pub mod value_objects;

// Re-export for convenience
pub use item::*;
pub use value_objects::*;

// ============================================================================
// Customer Domain - Customers and Their Order History
// ============================================================================
//
// This module contains all customer-specific code:
// - Value objects (CustomerId)
// - Customer entity with the online-order frequency query
//
// ============================================================================

pub mod entity;
pub mod value_objects;

// Re-export for convenience
pub use entity::*;
pub use value_objects::*;

// ============================================================================
// Order Domain - Orders Placed by Customers
// ============================================================================
//
// This module contains all order-specific code:
// - Value objects (OrderId, Email, PhoneNumber, OrderChannel, OrderLine)
// - Order entity
//
// Orders are constructed only by the pizzeria aggregate; the contact channel
// is fixed at construction and never changes.
//
// ============================================================================

pub mod entity;
pub mod value_objects;

// Re-export for convenience
pub use entity::*;
pub use value_objects::*;

// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// This module contains the pizzeria's domain areas. Each area has its own
// subdirectory with:
// - Value objects
// - Entities
// - Errors (where the area defines failure modes)
// - Aggregate implementation
//
// The `pizzeria` aggregate is the single entry point for mutations; the
// other areas hold the entities and value objects it manages.
//
// ============================================================================

pub mod catalog;
pub mod customer;
pub mod order;
pub mod pizzeria;

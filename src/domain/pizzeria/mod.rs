// ============================================================================
// Pizzeria Domain - Aggregate Root
// ============================================================================
//
// This module contains all pizzeria-specific code:
// - Errors (PizzeriaError enum)
// - Aggregate (Pizzeria with the catalog, customers and order ledger)
//
// All order placement goes through this aggregate so the ledger and the
// per-customer order lists always agree.
//
// ============================================================================

pub mod aggregate;
pub mod errors;

// Re-export for convenience
pub use aggregate::*;
pub use errors::*;

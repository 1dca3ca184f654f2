// ============================================================================
// Pizzeria Order Tracking - In-Memory Domain Model
// ============================================================================
//
// Catalog items, customers and orders placed over two contact channels,
// plus the best-selling-online-item query, behind a single aggregate root.
//
// ============================================================================

pub mod domain;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::catalog::ItemId;

// ============================================================================
// Order Value Objects
// ============================================================================

/// Order identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub Uuid);

impl OrderId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Contact email carried by an online order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Email(pub String);

impl Email {
    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Contact phone number carried by a phone order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneNumber(pub String);

impl PhoneNumber {
    pub fn new(phone: impl Into<String>) -> Self {
        Self(phone.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Contact channel an order was placed through. Fixed at construction.
///
/// Contact details are accepted as-is; malformed emails or phone numbers are
/// not rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "channel", content = "contact")]
pub enum OrderChannel {
    Online { email: Email },
    Phone { phone: PhoneNumber },
}

impl OrderChannel {
    /// Only online orders count toward a customer's item frequencies.
    pub fn counts_toward_frequency(&self) -> bool {
        matches!(self, OrderChannel::Online { .. })
    }
}

/// Snapshot of a catalog item at placement time.
///
/// The catalog entry itself stays shared; the line carries a copy of what
/// was sold so the order is self-contained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    item_id: ItemId,
    name: String,
    price: i64,
}

impl OrderLine {
    pub(crate) fn new(item_id: ItemId, name: impl Into<String>, price: i64) -> Self {
        Self {
            item_id,
            name: name.into(),
            price,
        }
    }

    pub fn item_id(&self) -> ItemId {
        self.item_id
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

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::customer::CustomerId;

use super::value_objects::{OrderChannel, OrderId, OrderLine};

// ============================================================================
// Order Entity
// ============================================================================

/// An order placed by a customer for a set of catalog items.
///
/// Construction is reserved for the pizzeria aggregate, which records the
/// order in its ledger and on the customer in the same step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer: CustomerId,
    channel: OrderChannel,
    lines: Vec<OrderLine>,
    placed_at: DateTime<Utc>,
}

impl Order {
    pub(crate) fn new(customer: CustomerId, channel: OrderChannel, lines: Vec<OrderLine>) -> Self {
        Self {
            id: OrderId::new(),
            customer,
            channel,
            lines,
            placed_at: Utc::now(),
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn customer(&self) -> CustomerId {
        self.customer
    }

    pub fn channel(&self) -> &OrderChannel {
        &self.channel
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::ItemId;
    use crate::domain::order::value_objects::Email;

    fn create_test_order() -> Order {
        Order::new(
            CustomerId(0),
            OrderChannel::Online {
                email: Email::new("ana@example.com"),
            },
            vec![OrderLine::new(ItemId(1), "Margherita", 1200)],
        )
    }

    #[test]
    fn test_order_holds_channel_and_lines() {
        let order = create_test_order();

        assert!(order.channel().counts_toward_frequency());
        assert_eq!(order.lines().len(), 1);
        assert_eq!(order.lines()[0].name(), "Margherita");
        assert_eq!(order.customer(), CustomerId(0));
    }

    #[test]
    fn test_orders_get_distinct_ids() {
        let first = create_test_order();
        let second = create_test_order();

        assert_ne!(first.id(), second.id());
    }
}

use serde::{Deserialize, Serialize};

use crate::domain::order::Order;

// ============================================================================
// Customer Entity
// ============================================================================

/// A named customer and the orders placed for them, in chronological
/// placement order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    name: String,
    orders: Vec<Order>,
}

impl Customer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            orders: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Attaching an order is reserved for the pizzeria aggregate so the
    /// customer's view and the aggregate ledger cannot drift apart.
    pub(crate) fn record_order(&mut self, order: Order) {
        self.orders.push(order);
    }

    /// Occurrence counts for the supplied item names across this customer's
    /// online orders.
    ///
    /// Every supplied name appears in the result, in the supplied order,
    /// starting at zero. Phone orders never contribute. Lines whose name is
    /// not in the supplied list are ignored.
    pub fn order_frequencies(&self, names: &[&str]) -> Vec<(String, u32)> {
        let mut frequencies: Vec<(String, u32)> =
            names.iter().map(|name| (name.to_string(), 0)).collect();

        for order in &self.orders {
            if !order.channel().counts_toward_frequency() {
                continue;
            }
            for line in order.lines() {
                if let Some(entry) = frequencies
                    .iter_mut()
                    .find(|(name, _)| name.as_str() == line.name())
                {
                    entry.1 += 1;
                }
            }
        }

        frequencies
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::ItemId;
    use crate::domain::customer::CustomerId;
    use crate::domain::order::{Email, OrderChannel, OrderLine, PhoneNumber};

    fn online_channel() -> OrderChannel {
        OrderChannel::Online {
            email: Email::new("ana@example.com"),
        }
    }

    fn phone_channel() -> OrderChannel {
        OrderChannel::Phone {
            phone: PhoneNumber::new("555-0101"),
        }
    }

    fn lines_for(names: &[&str]) -> Vec<OrderLine> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| OrderLine::new(ItemId(i as u64 + 1), *name, 1000))
            .collect()
    }

    #[test]
    fn test_no_orders_maps_every_name_to_zero() {
        let customer = Customer::new("Ana");

        let frequencies = customer.order_frequencies(&["Margherita", "Fugazzeta"]);

        assert_eq!(
            frequencies,
            vec![("Margherita".to_string(), 0), ("Fugazzeta".to_string(), 0)]
        );
    }

    #[test]
    fn test_phone_orders_never_contribute() {
        let mut customer = Customer::new("Bruno");
        customer.record_order(Order::new(
            CustomerId(0),
            phone_channel(),
            lines_for(&["Margherita", "Margherita", "Fugazzeta"]),
        ));

        let frequencies = customer.order_frequencies(&["Margherita", "Fugazzeta"]);

        assert!(frequencies.iter().all(|(_, count)| *count == 0));
    }

    #[test]
    fn test_online_occurrences_are_counted_per_name() {
        let mut customer = Customer::new("Ana");
        customer.record_order(Order::new(
            CustomerId(0),
            online_channel(),
            lines_for(&["Margherita", "Fugazzeta"]),
        ));
        customer.record_order(Order::new(
            CustomerId(0),
            online_channel(),
            lines_for(&["Fugazzeta"]),
        ));
        customer.record_order(Order::new(
            CustomerId(0),
            phone_channel(),
            lines_for(&["Fugazzeta"]),
        ));

        let frequencies = customer.order_frequencies(&["Margherita", "Fugazzeta", "Napolitana"]);

        assert_eq!(
            frequencies,
            vec![
                ("Margherita".to_string(), 1),
                ("Fugazzeta".to_string(), 2),
                ("Napolitana".to_string(), 0),
            ]
        );
    }

    #[test]
    fn test_result_preserves_supplied_name_order() {
        let customer = Customer::new("Ana");

        let frequencies = customer.order_frequencies(&["C", "A", "B"]);
        let names: Vec<&str> = frequencies.iter().map(|(name, _)| name.as_str()).collect();

        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_lines_outside_supplied_names_are_ignored() {
        let mut customer = Customer::new("Ana");
        customer.record_order(Order::new(
            CustomerId(0),
            online_channel(),
            lines_for(&["Calzone"]),
        ));

        let frequencies = customer.order_frequencies(&["Margherita"]);

        assert_eq!(frequencies, vec![("Margherita".to_string(), 0)]);
    }
}

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::catalog::{Item, ItemId, ItemIdGenerator};
use crate::domain::customer::{Customer, CustomerId};
use crate::domain::order::{Order, OrderChannel, OrderId, OrderLine};

use super::errors::PizzeriaError;

// ============================================================================
// Pizzeria Aggregate - Business Logic
// ============================================================================

/// Aggregate root owning the catalog, the customers and the order ledger.
///
/// Orders are constructed here and nowhere else: placement appends the order
/// id to the ledger and attaches the order to its customer in one step, so
/// the two views cannot diverge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pizzeria {
    name: String,
    customers: Vec<Customer>,
    catalog: Vec<Item>,
    order_log: Vec<OrderId>,
    item_ids: ItemIdGenerator,
}

impl Pizzeria {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            customers: Vec::new(),
            catalog: Vec::new(),
            order_log: Vec::new(),
            item_ids: ItemIdGenerator::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn items(&self) -> &[Item] {
        &self.catalog
    }

    /// Ids of every order placed, in placement order.
    pub fn order_ids(&self) -> &[OrderId] {
        &self.order_log
    }

    /// Registers a customer. Always succeeds; returns the customer's id.
    pub fn add_customer(&mut self, name: impl Into<String>) -> CustomerId {
        self.customers.push(Customer::new(name));
        CustomerId(self.customers.len() - 1)
    }

    /// Registers a catalog item, minting the next sequential id. Name and
    /// price are taken as-is.
    pub fn add_item(&mut self, name: impl Into<String>, price: i64) -> ItemId {
        let id = self.item_ids.next_id();
        self.catalog.push(Item::new(id, name, price));
        id
    }

    pub fn get_customer(&self, index: usize) -> Result<&Customer, PizzeriaError> {
        self.customers
            .get(index)
            .ok_or(PizzeriaError::CustomerOutOfRange {
                index,
                len: self.customers.len(),
            })
    }

    pub fn get_item(&self, index: usize) -> Result<&Item, PizzeriaError> {
        self.catalog.get(index).ok_or(PizzeriaError::ItemOutOfRange {
            index,
            len: self.catalog.len(),
        })
    }

    fn item_by_id(&self, id: ItemId) -> Option<&Item> {
        self.catalog.iter().find(|item| item.id() == id)
    }

    /// Places an order for the customer, snapshotting the requested catalog
    /// items into order lines.
    ///
    /// Fails without side effects when the customer id is out of range or an
    /// item id is not in the catalog.
    pub fn place_order(
        &mut self,
        customer: CustomerId,
        channel: OrderChannel,
        item_ids: &[ItemId],
    ) -> Result<OrderId, PizzeriaError> {
        let mut lines = Vec::with_capacity(item_ids.len());
        for &id in item_ids {
            let item = self.item_by_id(id).ok_or(PizzeriaError::UnknownItem(id))?;
            lines.push(OrderLine::new(id, item.name(), item.price()));
        }

        let len = self.customers.len();
        let slot = self
            .customers
            .get_mut(customer.index())
            .ok_or(PizzeriaError::CustomerOutOfRange {
                index: customer.index(),
                len,
            })?;

        let order = Order::new(customer, channel, lines);
        let order_id = order.id();
        self.order_log.push(order_id);
        slot.record_order(order);

        debug!(order = %order_id, customer = %customer, "order placed");

        Ok(order_id)
    }

    /// Catalog position of the item this customer ordered most often online,
    /// or `None` when the customer has no online-order occurrences at all.
    ///
    /// Ties break to the name that first reaches the maximum when scanning
    /// in catalog order. An invalid customer index is an error.
    pub fn best_selling_item(&self, customer_index: usize) -> Result<Option<usize>, PizzeriaError> {
        let customer = self.get_customer(customer_index)?;
        let names: Vec<&str> = self.catalog.iter().map(|item| item.name()).collect();

        let frequencies = customer.order_frequencies(&names);
        for (name, count) in &frequencies {
            debug!(item = %name, count, "online order frequency");
        }

        let mut best: Option<(usize, u32)> = None;
        for (position, (_, count)) in frequencies.iter().enumerate() {
            if *count > 0 && best.map_or(true, |(_, max)| *count > max) {
                best = Some((position, *count));
            }
        }

        Ok(best.map(|(position, _)| position))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

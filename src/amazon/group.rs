use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::{hash_map::Entry, HashMap};

use super::order::{OrderId, OrderLineItem};

/// All line items of one order. `order_total` is the sum of the item totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedOrder {
    pub order_date: NaiveDate,
    pub order_id: OrderId,
    pub order_total: Decimal,
    pub items: Vec<OrderLineItem>,
}

impl GroupedOrder {
    fn new(first_item: OrderLineItem) -> Self {
        Self {
            order_date: first_item.order_date,
            order_id: first_item.order_id.clone(),
            order_total: first_item.item_total,
            items: vec![first_item],
        }
    }

    fn add_item(&mut self, item: OrderLineItem) {
        self.order_total += item.item_total;
        self.items.push(item);
    }
}

/// Groups line items by order id. Groups are returned in the order their first item was seen.
pub fn group_orders<'a>(items: impl IntoIterator<Item = &'a OrderLineItem>) -> Vec<GroupedOrder> {
    let mut grouped: Vec<GroupedOrder> = Vec::new();
    let mut index_by_order_id: HashMap<OrderId, usize> = HashMap::new();
    for item in items {
        match index_by_order_id.entry(item.order_id.clone()) {
            Entry::Occupied(index) => {
                grouped[*index.get()].add_item(item.clone());
            }
            Entry::Vacant(index) => {
                index.insert(grouped.len());
                grouped.push(GroupedOrder::new(item.clone()));
            }
        }
    }
    grouped
}

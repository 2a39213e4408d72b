use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderId(pub String);

impl Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of the Amazon "Items" order export. An order with several items has several rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLineItem {
    pub order_date: NaiveDate,
    pub order_id: OrderId,
    pub title: String,
    pub category: String,
    pub condition: String,
    pub seller: String,
    pub purchase_price_per_unit: Decimal,
    pub quantity: u32,
    pub payment_instrument_type: String,
    pub purchase_order_number: String,
    pub po_line_number: String,
    pub ordering_customer_email: String,
    pub item_subtotal: Decimal,
    pub item_subtotal_tax: Decimal,
    pub item_total: Decimal,
    pub buyer_name: String,
    pub currency: String,
}

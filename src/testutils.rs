use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::amazon::{OrderId, OrderLineItem};
use crate::lunchmoney::{LedgerTransaction, TransactionId};

pub const STEAMER_TITLE: &str = "Sayfine Vegetable Steamer Basket, Premium Stainless Steel Veggie Steamer Basket - Folding Expandable Steamers to Fits Various Size Pot (6\" to 10.5\")";
pub const INULIN_TITLE: &str =
    "Anthony's Organic Inulin Powder, 1 lb, Gluten Free, Non GMO, Made from Jerusalem Artichokes";
pub const HAT_TITLE: &str = "FURTALK Sun Visor Hats for Women Wide Brim Straw Roll Up Ponytail Summer Beach Hat UV UPF 50 Packable Foldable Travel";

pub fn date(date: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap()
}

pub fn amount(amount: &str) -> Decimal {
    Decimal::from_str(amount).unwrap()
}

/// A $9.99 single-unit line item. Tests override the fields they care about.
pub fn base_item() -> OrderLineItem {
    OrderLineItem {
        order_date: date("2021-03-21"),
        order_id: OrderId("123-9999001-0111004".to_string()),
        title: String::new(),
        category: String::new(),
        condition: "new".to_string(),
        seller: "SAYFINE".to_string(),
        purchase_price_per_unit: amount("9.99"),
        quantity: 1,
        payment_instrument_type: "Visa - 1234".to_string(),
        purchase_order_number: String::new(),
        po_line_number: String::new(),
        ordering_customer_email: "test@gmail.com".to_string(),
        item_subtotal: amount("9.99"),
        item_subtotal_tax: Decimal::ZERO,
        item_total: amount("9.99"),
        buyer_name: "Test Person".to_string(),
        currency: "USD".to_string(),
    }
}

pub fn titled_item(title: &str, category: &str, item_total: &str) -> OrderLineItem {
    OrderLineItem {
        title: title.to_string(),
        category: category.to_string(),
        item_total: amount(item_total),
        ..base_item()
    }
}

pub fn line_item(order_id: &str, order_date: &str, item_total: &str) -> OrderLineItem {
    OrderLineItem {
        order_date: date(order_date),
        order_id: OrderId(order_id.to_string()),
        title: format!("Item of order {order_id}"),
        category: "OBJECT".to_string(),
        purchase_price_per_unit: amount(item_total),
        item_subtotal: amount(item_total),
        item_total: amount(item_total),
        ..base_item()
    }
}

/// Three orders on two days. The last order has two identical hats.
pub fn test_orders() -> Vec<OrderLineItem> {
    let hat = OrderLineItem {
        order_date: date("2021-03-22"),
        order_id: OrderId("123-9999001-0111006".to_string()),
        title: HAT_TITLE.to_string(),
        category: "HAT".to_string(),
        seller: "Fammison".to_string(),
        purchase_price_per_unit: amount("15.99"),
        item_subtotal: amount("15.99"),
        item_total: amount("15.99"),
        ..base_item()
    };
    vec![
        OrderLineItem {
            title: STEAMER_TITLE.to_string(),
            category: "COOKWARE".to_string(),
            ..base_item()
        },
        OrderLineItem {
            order_id: OrderId("123-9999001-0111005".to_string()),
            title: INULIN_TITLE.to_string(),
            category: "GROCERY".to_string(),
            seller: "Anthony's Goods".to_string(),
            purchase_price_per_unit: amount("12.99"),
            item_subtotal: amount("12.99"),
            item_total: amount("12.99"),
            ..base_item()
        },
        hat.clone(),
        hat,
    ]
}

pub fn ledger_transaction(
    id: u64,
    transaction_date: &str,
    transaction_amount: &str,
) -> LedgerTransaction {
    LedgerTransaction {
        id: TransactionId(id),
        date: date(transaction_date),
        payee: Some("Amazon".to_string()),
        amount: amount(transaction_amount),
        currency: Some("usd".to_string()),
        notes: None,
        category_id: None,
        status: Some("cleared".to_string()),
        is_group: false,
        group_id: None,
        tags: None,
    }
}

/// One Lunch Money transaction per order in [test_orders]
pub fn test_transactions() -> Vec<LedgerTransaction> {
    vec![
        ledger_transaction(1, "2021-03-21", "9.9900"),
        ledger_transaction(2, "2021-03-21", "12.9900"),
        ledger_transaction(3, "2021-03-22", "31.9800"),
    ]
}

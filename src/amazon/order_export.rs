use anyhow::{anyhow, ensure, Context as _, Result};
use csv::StringRecord;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use super::order::{OrderId, OrderLineItem};
use crate::dates::parse_order_date;

/// Columns of the Amazon "Items" order export. Other columns are ignored.
pub const EXPECTED_HEADERS: [&str; 17] = [
    ORDER_DATE,
    ORDER_ID,
    TITLE,
    CATEGORY,
    CONDITION,
    SELLER,
    PURCHASE_PRICE_PER_UNIT,
    QUANTITY,
    PAYMENT_INSTRUMENT_TYPE,
    PURCHASE_ORDER_NUMBER,
    PO_LINE_NUMBER,
    ORDERING_CUSTOMER_EMAIL,
    ITEM_SUBTOTAL,
    ITEM_SUBTOTAL_TAX,
    ITEM_TOTAL,
    BUYER_NAME,
    CURRENCY,
];

const ORDER_DATE: &str = "Order Date";
const ORDER_ID: &str = "Order ID";
const TITLE: &str = "Title";
const CATEGORY: &str = "Category";
const CONDITION: &str = "Condition";
const SELLER: &str = "Seller";
const PURCHASE_PRICE_PER_UNIT: &str = "Purchase Price Per Unit";
const QUANTITY: &str = "Quantity";
const PAYMENT_INSTRUMENT_TYPE: &str = "Payment Instrument Type";
const PURCHASE_ORDER_NUMBER: &str = "Purchase Order Number";
const PO_LINE_NUMBER: &str = "PO Line Number";
const ORDERING_CUSTOMER_EMAIL: &str = "Ordering Customer Email";
const ITEM_SUBTOTAL: &str = "Item Subtotal";
const ITEM_SUBTOTAL_TAX: &str = "Item Subtotal Tax";
const ITEM_TOTAL: &str = "Item Total";
const BUYER_NAME: &str = "Buyer Name";
const CURRENCY: &str = "Currency";

pub async fn load_file(path: &Path) -> Result<Vec<OrderLineItem>> {
    log::info!("Loading Amazon orders...");
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| anyhow!("Failed to read {}", path.display()))?;
    let items = parse(content)?;
    log::info!("Loading Amazon orders...done ({} line items)", items.len());
    Ok(items)
}

pub fn load(mut input_stream: impl Read) -> Result<Vec<OrderLineItem>> {
    let mut content = String::new();
    input_stream.read_to_string(&mut content)?;
    parse(content)
}

fn parse(content: String) -> Result<Vec<OrderLineItem>> {
    let content = maybe_remove_byte_order_mark(content);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(b',')
        .from_reader(content.as_bytes());
    let columns = Columns::from_headers(reader.headers()?)?;
    reader
        .records()
        .map(|record| columns.parse_record(&record?))
        .collect()
}

fn maybe_remove_byte_order_mark(mut content: String) -> String {
    if content.starts_with('\u{FEFF}') {
        content.remove(0);
    }
    content
}

/// Exports have been seen with both `Order Date` and `Order_Date` spellings
fn normalize_header(header: &str) -> String {
    header.trim().replace('_', " ")
}

struct Columns {
    index_by_header: HashMap<&'static str, usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let found: HashMap<String, usize> = headers
            .iter()
            .enumerate()
            .map(|(index, header)| (normalize_header(header), index))
            .collect();
        let missing: Vec<&str> = EXPECTED_HEADERS
            .iter()
            .copied()
            .filter(|expected| !found.contains_key(*expected))
            .collect();
        ensure!(
            missing.is_empty(),
            "Amazon orders CSV missing expected headers: {}",
            missing.join(","),
        );
        let index_by_header = EXPECTED_HEADERS
            .iter()
            .filter_map(|&expected| found.get(expected).map(|&index| (expected, index)))
            .collect();
        Ok(Self { index_by_header })
    }

    fn get<'r>(&self, record: &'r StringRecord, header: &'static str) -> &'r str {
        self.index_by_header
            .get(header)
            .and_then(|&index| record.get(index))
            .unwrap_or("")
    }

    fn text(&self, record: &StringRecord, header: &'static str) -> String {
        self.get(record, header).to_string()
    }

    fn parse_record(&self, record: &StringRecord) -> Result<OrderLineItem> {
        Ok(OrderLineItem {
            order_date: parse_order_date(self.get(record, ORDER_DATE))?,
            order_id: OrderId(self.text(record, ORDER_ID)),
            title: self.text(record, TITLE),
            category: self.text(record, CATEGORY),
            condition: self.text(record, CONDITION),
            seller: self.text(record, SELLER),
            purchase_price_per_unit: parse_amount(self.get(record, PURCHASE_PRICE_PER_UNIT))?,
            quantity: parse_quantity(self.get(record, QUANTITY))?,
            payment_instrument_type: self.text(record, PAYMENT_INSTRUMENT_TYPE),
            purchase_order_number: self.text(record, PURCHASE_ORDER_NUMBER),
            po_line_number: self.text(record, PO_LINE_NUMBER),
            ordering_customer_email: self.text(record, ORDERING_CUSTOMER_EMAIL),
            item_subtotal: parse_amount(self.get(record, ITEM_SUBTOTAL))?,
            item_subtotal_tax: parse_amount(self.get(record, ITEM_SUBTOTAL_TAX))?,
            item_total: parse_amount(self.get(record, ITEM_TOTAL))?,
            buyer_name: self.text(record, BUYER_NAME),
            currency: self.text(record, CURRENCY),
        })
    }
}

/// Money columns look like `$12.99`. An empty cell counts as zero.
fn parse_amount(value: &str) -> Result<Decimal> {
    let trimmed = value.trim();
    let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed);
    if trimmed.is_empty() {
        return Ok(Decimal::ZERO);
    }
    Decimal::from_str(&trimmed.replace(',', ""))
        .map_err(|_| anyhow!("Value {value} cannot be parsed to number"))
}

fn parse_quantity(value: &str) -> Result<u32> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse()
        .map_err(|_| anyhow!("Value {value} cannot be parsed to number"))
}

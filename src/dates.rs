use anyhow::{anyhow, bail, ensure, Result};
use chrono::{Datelike as _, NaiveDate};

/// Date format used by Lunch Money, e.g. `2021-03-05`
pub const LEDGER_DATE_FORMAT: &str = "%Y-%m-%d";
/// Date format used by the Amazon order export, e.g. `03/05/2021`
pub const ORDER_DATE_FORMAT: &str = "%m/%d/%Y";

pub fn parse_ledger_date(date: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), LEDGER_DATE_FORMAT)
        .map_err(|_| anyhow!("Value {date} cannot be parsed to date"))
}

/// Parses an order date. Accepts the export format and, for already converted data, the
/// ledger format.
pub fn parse_order_date(date: &str) -> Result<NaiveDate> {
    let trimmed = date.trim();
    NaiveDate::parse_from_str(trimmed, ORDER_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(trimmed, LEDGER_DATE_FORMAT))
        .map_err(|_| anyhow!("Value {date} cannot be parsed to date"))
}

pub fn format_ledger_date(date: NaiveDate) -> String {
    date.format(LEDGER_DATE_FORMAT).to_string()
}

pub fn format_order_date(date: NaiveDate) -> String {
    date.format(ORDER_DATE_FORMAT).to_string()
}

/// `03/05/2021` -> `2021-03-05`
pub fn to_ledger_format(order_date: &str) -> Result<String> {
    let date = NaiveDate::parse_from_str(order_date.trim(), ORDER_DATE_FORMAT)
        .map_err(|_| anyhow!("Value {order_date} cannot be parsed to date"))?;
    Ok(format_ledger_date(date))
}

/// `2021-03-05` -> `03/05/2021`
pub fn to_order_format(ledger_date: &str) -> Result<String> {
    Ok(format_order_date(parse_ledger_date(ledger_date)?))
}

/// Inclusive range of ledger transaction dates to process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl DateRange {
    /// No dates selects the current month up to today, a start date alone runs through today.
    pub fn resolve(
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<Self> {
        let range = match (start_date, end_date) {
            (Some(start_date), Some(end_date)) => Self {
                start_date,
                end_date,
            },
            (Some(start_date), None) => Self {
                start_date,
                end_date: today,
            },
            (None, None) => Self {
                start_date: first_day_of_month(today)?,
                end_date: today,
            },
            (None, Some(_)) => bail!(
                "Pass in either no dates for current month transactions, start date only for through current date, or both start and end dates"
            ),
        };
        ensure!(
            range.start_date <= range.end_date,
            "Start date {} is after end date {}",
            format_ledger_date(range.start_date),
            format_ledger_date(range.end_date),
        );
        Ok(range)
    }
}

fn first_day_of_month(date: NaiveDate) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
        .ok_or_else(|| anyhow!("Invalid month in {date}"))
}

use anyhow::{ensure, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use super::client::LunchMoney;
use super::ledger::{Ledger, TransactionFilter};
use crate::dates::format_ledger_date;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct TransactionId(pub u64);

impl Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: u64,
    pub name: String,
}

/// A transaction as stored in Lunch Money. Only `date` and `amount` take part in matching.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LedgerTransaction {
    pub id: TransactionId,
    pub date: NaiveDate,
    #[serde(default)]
    pub payee: Option<String>,
    /// Lunch Money sends amounts as strings with four decimals, e.g. `"9.9900"`
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub category_id: Option<u64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub is_group: bool,
    #[serde(default)]
    pub group_id: Option<u64>,
    #[serde(default)]
    pub tags: Option<Vec<Tag>>,
}

#[derive(Deserialize)]
struct TransactionsResponse {
    transactions: Vec<LedgerTransaction>,
}

#[derive(Serialize)]
struct UpdateTransactionRequest<'a> {
    transaction: TransactionNotesUpdate<'a>,
}

#[derive(Serialize)]
struct TransactionNotesUpdate<'a> {
    notes: &'a str,
}

#[derive(Deserialize)]
struct UpdateTransactionResponse {
    updated: bool,
}

fn transactions_query(filter: &TransactionFilter) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("start_date", format_ledger_date(filter.date_range.start_date)),
        ("end_date", format_ledger_date(filter.date_range.end_date)),
    ];
    if let Some(tag_id) = filter.tag_id {
        query.push(("tag_id", tag_id.to_string()));
    }
    query
}

impl Ledger for LunchMoney {
    async fn get_transactions(
        &self,
        filter: &TransactionFilter,
    ) -> Result<Vec<LedgerTransaction>> {
        log::info!("Requesting transactions...");
        let response: TransactionsResponse =
            self.get("transactions", &transactions_query(filter)).await?;
        log::info!(
            "Requesting transactions...done ({} transactions)",
            response.transactions.len()
        );
        Ok(response.transactions)
    }

    async fn update_transaction_notes(&self, id: TransactionId, notes: &str) -> Result<()> {
        let response: UpdateTransactionResponse = self
            .put(
                &format!("transactions/{id}"),
                &UpdateTransactionRequest {
                    transaction: TransactionNotesUpdate { notes },
                },
            )
            .await?;
        ensure!(response.updated, "Lunch Money didn't update transaction {id}");
        Ok(())
    }
}

use anyhow::Result;

use super::transactions::{LedgerTransaction, TransactionId};
use crate::dates::DateRange;

/// Which ledger transactions to fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionFilter {
    pub date_range: DateRange,
    pub tag_id: Option<u64>,
}

/// The budgeting service that holds the transactions we annotate.
#[allow(async_fn_in_trait)]
pub trait Ledger {
    async fn get_transactions(
        &self,
        filter: &TransactionFilter,
    ) -> Result<Vec<LedgerTransaction>>;

    /// Overwrites the note of one transaction. Other fields stay untouched.
    async fn update_transaction_notes(&self, id: TransactionId, notes: &str) -> Result<()>;
}

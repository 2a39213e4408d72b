use crate::amazon::{OrderId, OrderLineItem};
use crate::lunchmoney::{Ledger, LedgerTransaction};
use crate::matching::{match_transactions_to_orders, MatchResult, MatchedPair, SkippedTransaction};
use crate::note::transaction_note;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatedTransaction {
    pub transaction: LedgerTransaction,
    pub order_id: OrderId,
    pub note: String,
}

#[derive(Debug)]
pub struct FailedUpdate {
    pub transaction: LedgerTransaction,
    pub note: String,
    pub error: anyhow::Error,
}

#[derive(Debug, Default)]
pub struct EnrichmentReport {
    pub updated: Vec<UpdatedTransaction>,
    pub failed: Vec<FailedUpdate>,
    pub skipped: Vec<SkippedTransaction>,
}

impl EnrichmentReport {
    pub fn num_updated(&self) -> usize {
        self.updated.len()
    }
}

/// Matches the transactions to orders and writes a note describing the order into each
/// matched transaction.
///
/// Updates are sent one at a time. A failed update is logged and reported, the remaining
/// transactions are still processed. Nothing is retried.
pub async fn enrich_transactions_with_order_details(
    ledger: &impl Ledger,
    transactions: Vec<LedgerTransaction>,
    line_items: &[OrderLineItem],
) -> EnrichmentReport {
    let MatchResult { matched, skipped } = match_transactions_to_orders(transactions, line_items);
    let mut report = EnrichmentReport {
        skipped,
        ..Default::default()
    };
    for MatchedPair { transaction, order } in matched {
        let note = transaction_note(&order.items);
        match ledger.update_transaction_notes(transaction.id, &note).await {
            Ok(()) => {
                log::debug!("Updated transaction {} with order {}", transaction.id, order.order_id);
                report.updated.push(UpdatedTransaction {
                    transaction,
                    order_id: order.order_id,
                    note,
                });
            }
            Err(error) => {
                log::error!(
                    "Failed to update Lunch Money transaction {}: {:#}",
                    transaction.id,
                    error
                );
                report.failed.push(FailedUpdate {
                    transaction,
                    note,
                    error,
                });
            }
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use anyhow::{anyhow, Result};
    use std::collections::HashSet;
    use std::sync::Mutex;

    use crate::dates::DateRange;
    use crate::lunchmoney::{TransactionFilter, TransactionId};
    use crate::matching::SkipReason;
    use crate::testutils::{
        date, ledger_transaction, test_orders, test_transactions, HAT_TITLE, INULIN_TITLE,
        STEAMER_TITLE,
    };

    use super::*;

    /// In-memory stand-in for Lunch Money
    struct FakeLedger {
        transactions: Mutex<Vec<LedgerTransaction>>,
        failing_ids: HashSet<TransactionId>,
        update_calls: Mutex<Vec<TransactionId>>,
    }

    impl FakeLedger {
        fn new(transactions: Vec<LedgerTransaction>) -> Self {
            Self {
                transactions: Mutex::new(transactions),
                failing_ids: HashSet::new(),
                update_calls: Mutex::new(Vec::new()),
            }
        }

        fn failing_on(mut self, id: TransactionId) -> Self {
            self.failing_ids.insert(id);
            self
        }

        fn notes(&self) -> Vec<Option<String>> {
            self.transactions
                .lock()
                .unwrap()
                .iter()
                .map(|t| t.notes.clone())
                .collect()
        }
    }

    impl Ledger for FakeLedger {
        async fn get_transactions(
            &self,
            filter: &TransactionFilter,
        ) -> Result<Vec<LedgerTransaction>> {
            Ok(self
                .transactions
                .lock()
                .unwrap()
                .iter()
                .filter(|t| {
                    filter.date_range.start_date <= t.date && t.date <= filter.date_range.end_date
                })
                .cloned()
                .collect())
        }

        async fn update_transaction_notes(&self, id: TransactionId, notes: &str) -> Result<()> {
            self.update_calls.lock().unwrap().push(id);
            if self.failing_ids.contains(&id) {
                return Err(anyhow!("Transaction ID not found"));
            }
            let mut transactions = self.transactions.lock().unwrap();
            let transaction = transactions
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or_else(|| anyhow!("Transaction ID not found"))?;
            transaction.notes = Some(notes.to_string());
            Ok(())
        }
    }

    fn march_2021() -> TransactionFilter {
        TransactionFilter {
            date_range: DateRange {
                start_date: date("2021-03-01"),
                end_date: date("2021-03-31"),
            },
            tag_id: None,
        }
    }

    fn expected_notes() -> Vec<String> {
        vec![
            format!("(COOKWARE) {STEAMER_TITLE}"),
            format!("(GROCERY) {INULIN_TITLE}"),
            format!("Item 1: $15.99: (HAT): {HAT_TITLE}; Item 2: $15.99: (HAT): {HAT_TITLE}"),
        ]
    }

    #[tokio::test]
    async fn transactions_are_enriched_with_order_details() {
        let ledger = FakeLedger::new(test_transactions());
        let transactions = ledger.get_transactions(&march_2021()).await.unwrap();

        let report =
            enrich_transactions_with_order_details(&ledger, transactions, &test_orders()).await;

        assert_eq!(3, report.num_updated());
        assert!(report.failed.is_empty());
        assert!(report.skipped.is_empty());
        assert_eq!(
            expected_notes(),
            report.updated.iter().map(|u| u.note.clone()).collect::<Vec<_>>(),
        );
        assert_eq!(
            expected_notes().into_iter().map(Some).collect::<Vec<_>>(),
            ledger.notes(),
        );
        let enriched = ledger.get_transactions(&march_2021()).await.unwrap();
        assert_eq!(
            vec!["9.9900", "12.9900", "31.9800"],
            enriched.iter().map(|t| t.amount.to_string()).collect::<Vec<_>>(),
        );
    }

    #[tokio::test]
    async fn failed_update_doesnt_stop_the_others() {
        let ledger = FakeLedger::new(test_transactions()).failing_on(TransactionId(2));
        let report =
            enrich_transactions_with_order_details(&ledger, test_transactions(), &test_orders())
                .await;

        assert_eq!(
            vec![TransactionId(1), TransactionId(3)],
            report
                .updated
                .iter()
                .map(|u| u.transaction.id)
                .collect::<Vec<_>>(),
        );
        assert_eq!(1, report.failed.len());
        assert_eq!(TransactionId(2), report.failed[0].transaction.id);
        assert_eq!(expected_notes()[1], report.failed[0].note);
        assert_eq!("Transaction ID not found", report.failed[0].error.to_string());
        assert_eq!(
            vec![TransactionId(1), TransactionId(2), TransactionId(3)],
            *ledger.update_calls.lock().unwrap(),
        );
        assert_eq!(
            vec![Some(expected_notes()[0].clone()), None, Some(expected_notes()[2].clone())],
            ledger.notes(),
        );
    }

    #[tokio::test]
    async fn unmatched_transactions_are_not_updated() {
        let mut transactions = test_transactions();
        transactions.push(ledger_transaction(4, "2021-03-25", "99.99"));
        let ledger = FakeLedger::new(transactions.clone());

        let report =
            enrich_transactions_with_order_details(&ledger, transactions, &test_orders()).await;

        assert_eq!(3, report.num_updated());
        assert_eq!(1, report.skipped.len());
        assert_eq!(TransactionId(4), report.skipped[0].transaction.id);
        assert_eq!(SkipReason::NoMatchingOrder, report.skipped[0].reason);
        assert!(!ledger.update_calls.lock().unwrap().contains(&TransactionId(4)));
        assert_eq!(None, ledger.notes()[3]);
    }

    #[tokio::test]
    async fn nothing_to_do() {
        let ledger = FakeLedger::new(vec![]);
        let report = enrich_transactions_with_order_details(&ledger, vec![], &test_orders()).await;
        assert_eq!(0, report.num_updated());
        assert!(report.skipped.is_empty());
        assert!(ledger.update_calls.lock().unwrap().is_empty());
    }
}

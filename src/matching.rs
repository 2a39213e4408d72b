//! Pairs Lunch Money transactions with Amazon orders.
//!
//! A transaction matches an order if both happened on the same date and the transaction
//! amount equals the order total exactly. Transactions with no matching order or with
//! several matching orders can't be resolved automatically and are skipped.

use crate::amazon::{group_orders, GroupedOrder, OrderLineItem};
use crate::dates::format_ledger_date;
use crate::lunchmoney::LedgerTransaction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedPair {
    pub transaction: LedgerTransaction,
    pub order: GroupedOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoMatchingOrder,
    MultipleMatchingOrders { num_matches: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedTransaction {
    pub transaction: LedgerTransaction,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchResult {
    /// In the order of the input transactions
    pub matched: Vec<MatchedPair>,
    /// Need manual follow-up
    pub skipped: Vec<SkippedTransaction>,
}

pub fn match_transactions_to_orders(
    transactions: impl IntoIterator<Item = LedgerTransaction>,
    line_items: &[OrderLineItem],
) -> MatchResult {
    let grouped_orders = group_orders(line_items);
    let mut result = MatchResult::default();
    for transaction in transactions {
        let mut matching_orders = grouped_orders.iter().filter(|order| {
            order.order_date == transaction.date && order.order_total == transaction.amount
        });
        match (matching_orders.next(), matching_orders.count()) {
            (Some(order), 0) => {
                let order = order.clone();
                result.matched.push(MatchedPair { transaction, order });
            }
            (None, _) => {
                log::warn!(
                    "Could not match Lunch Money transaction: {} ${} to an Amazon order! Skipping...",
                    format_ledger_date(transaction.date),
                    transaction.amount,
                );
                result.skipped.push(SkippedTransaction {
                    transaction,
                    reason: SkipReason::NoMatchingOrder,
                });
            }
            (Some(_), num_other_matches) => {
                log::warn!(
                    "Lunch Money transaction: {} ${} matched multiple Amazon orders! Skipping...",
                    format_ledger_date(transaction.date),
                    transaction.amount,
                );
                result.skipped.push(SkippedTransaction {
                    transaction,
                    reason: SkipReason::MultipleMatchingOrders {
                        num_matches: num_other_matches + 1,
                    },
                });
            }
        }
    }
    result
}

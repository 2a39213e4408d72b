mod access_token;
mod client;
mod ledger;
mod transactions;

pub use access_token::AccessToken;
pub use client::{LunchMoney, DEFAULT_BASE_URL};
pub use ledger::{Ledger, TransactionFilter};
pub use transactions::{LedgerTransaction, Tag, TransactionId};

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::lunchmoney::DEFAULT_BASE_URL;

/// Write Amazon order details into the notes of matching Lunch Money transactions.
#[derive(Parser, Debug)]
pub struct Args {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Match Lunch Money Amazon transactions to Amazon orders and write the order details into
    /// their notes. Without dates, the current month is used.
    Match(MatchArgs),
}

#[derive(Debug, clap::Args)]
pub struct MatchArgs {
    /// First transaction date (YYYY-MM-DD)
    #[clap(short, long, value_parser = parse_date)]
    pub start_date: Option<NaiveDate>,

    /// Last transaction date (YYYY-MM-DD). Requires a start date.
    #[clap(short, long, value_parser = parse_date)]
    pub end_date: Option<NaiveDate>,

    /// Amazon order details export
    #[clap(long, default_value = "./order-csv/amazon_order_details.csv")]
    pub orders_csv: PathBuf,

    /// Lunch Money developer access token
    #[clap(long, env = "LUNCHMONEY_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: String,

    /// Only look at Lunch Money transactions with this tag
    #[clap(long, env = "AMAZON_TAG_ID")]
    pub tag_id: Option<u64>,

    #[clap(long, env = "LUNCHMONEY_API_URL", default_value = DEFAULT_BASE_URL)]
    pub api_base_url: String,
}

fn parse_date(date: &str) -> Result<NaiveDate, String> {
    crate::dates::parse_ledger_date(date).map_err(|err| err.to_string())
}

pub fn parse() -> Args {
    Args::parse()
}

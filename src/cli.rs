use anyhow::{bail, Result};
use chrono::Local;
use std::path::Path;

use crate::amazon;
use crate::args::{Args, Command, MatchArgs};
use crate::dates::{format_ledger_date, DateRange};
use crate::enrich::enrich_transactions_with_order_details;
use crate::lunchmoney::{AccessToken, Ledger as _, LunchMoney, TransactionFilter};
use crate::terminal::{self, StdoutLineWriter};

pub async fn main(args: Args) -> Result<()> {
    match args.command {
        Command::Match(args) => main_match(args).await,
    }
}

async fn main_match(args: MatchArgs) -> Result<()> {
    let today = Local::now().date_naive();
    let date_range = DateRange::resolve(args.start_date, args.end_date, today)?;
    log::info!(
        "Matching Lunch Money transactions from {} to {}",
        format_ledger_date(date_range.start_date),
        format_ledger_date(date_range.end_date),
    );

    ensure_orders_csv_exists(&args.orders_csv).await?;
    let line_items = amazon::load_file(&args.orders_csv).await?;

    let lunch_money =
        LunchMoney::with_base_url(AccessToken::new(args.access_token), &args.api_base_url)?;
    let transactions = lunch_money
        .get_transactions(&TransactionFilter {
            date_range,
            tag_id: args.tag_id,
        })
        .await?;

    let report =
        enrich_transactions_with_order_details(&lunch_money, transactions, &line_items).await;

    terminal::print_report(&StdoutLineWriter, &report);
    Ok(())
}

async fn ensure_orders_csv_exists(path: &Path) -> Result<()> {
    if !tokio::fs::try_exists(path).await? {
        bail!(
            "Please place your Amazon order details CSV at {}",
            path.display()
        );
    }
    Ok(())
}

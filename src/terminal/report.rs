use console::{style, StyledObject};
use rust_decimal::Decimal;

use crate::dates::format_ledger_date;
use crate::enrich::EnrichmentReport;
use crate::lunchmoney::LedgerTransaction;
use crate::matching::SkipReason;

const INDENT_SIZE: usize = 2;

pub trait LineWriter {
    fn write_line(&self, line: &str);
}

#[derive(Clone, Copy)]
pub struct StdoutLineWriter;
impl LineWriter for StdoutLineWriter {
    fn write_line(&self, line: &str) {
        println!("{}", line);
    }
}

/// Prints updated, failed and skipped transactions as nested bullet points, followed by an
/// unstyled summary line
pub fn print_report(writer: &impl LineWriter, report: &EnrichmentReport) {
    writer.write_line(&style_header("Updated transactions:").to_string());
    if report.updated.is_empty() {
        writer.write_line(&style("(none)").italic().to_string());
    }
    for updated in &report.updated {
        print_item(writer, 0, style_transaction(&updated.transaction));
        print_item(writer, 1, style_note(&updated.note));
    }

    if !report.failed.is_empty() {
        writer.write_line("");
        writer.write_line(&style_header("Failed updates:").to_string());
        for failed in &report.failed {
            print_item(writer, 0, style_transaction(&failed.transaction));
            print_item(writer, 1, style_error(&format!("{:#}", failed.error)));
        }
    }

    if !report.skipped.is_empty() {
        writer.write_line("");
        writer.write_line(
            &style_header("Skipped transactions, please match manually:").to_string(),
        );
        for skipped in &report.skipped {
            print_item(writer, 0, style_transaction(&skipped.transaction));
            print_item(writer, 1, style_error(&describe_skip_reason(skipped.reason)));
        }
    }

    writer.write_line("");
    writer.write_line(&format!(
        "{} Lunch Money transactions have been successfully updated!",
        report.num_updated()
    ));
}

fn print_item(writer: &impl LineWriter, nesting: usize, message: impl std::fmt::Display) {
    let indent = " ".repeat(nesting * INDENT_SIZE);
    writer.write_line(&format!("{}• {}", indent, message));
}

fn describe_skip_reason(reason: SkipReason) -> String {
    match reason {
        SkipReason::NoMatchingOrder => "No Amazon order with this date and total".to_string(),
        SkipReason::MultipleMatchingOrders { num_matches } => {
            format!("{num_matches} Amazon orders with this date and total")
        }
    }
}

fn style_header(header: &str) -> StyledObject<&str> {
    style(header).bold().underlined()
}

fn style_transaction(transaction: &LedgerTransaction) -> String {
    format!(
        "{} {} {}",
        style_date(transaction.date),
        style_amount(transaction.amount),
        style_payee(transaction.payee.as_deref().unwrap_or("")),
    )
}

fn style_date(date: chrono::NaiveDate) -> StyledObject<String> {
    style(format_ledger_date(date))
}

fn style_amount(amount: Decimal) -> StyledObject<String> {
    let result = style(format!("${amount}")).bold();
    if amount < Decimal::ZERO {
        result.green()
    } else {
        result.red()
    }
}

fn style_payee(payee: &str) -> StyledObject<&str> {
    style(payee).yellow()
}

fn style_note(note: &str) -> StyledObject<&str> {
    style(note).blue()
}

fn style_error(message: &str) -> StyledObject<&str> {
    style(message).magenta()
}

use console::style;
use log::{Level, Record};
use std::io::Write as _;

/// Logs to stderr: info in cyan, warnings in yellow, errors in red.
/// The default level is `info`, `RUST_LOG` overrides it.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}", format_record(record)))
        .init();
}

fn format_record(record: &Record) -> String {
    let message = record.args().to_string();
    match record.level() {
        Level::Error => style(message).red().to_string(),
        Level::Warn => style(message).yellow().to_string(),
        Level::Info => style(message).cyan().to_string(),
        Level::Debug | Level::Trace => message,
    }
}

pub mod amazon;
pub mod args;
pub mod cli;
pub mod dates;
pub mod enrich;
pub mod logger;
pub mod lunchmoney;
pub mod matching;
pub mod note;
mod terminal;

#[cfg(test)]
mod testutils;

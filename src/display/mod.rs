//! Terminal output formatting for tally-cli

pub mod account;
pub mod entry;

pub use account::format_account_list;
pub use entry::{format_entry_list, format_summary};

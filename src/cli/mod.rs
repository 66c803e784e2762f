//! CLI command handlers
//!
//! Translates parsed argv into structured commands, runs them against the
//! loaded book and active account, persists the results, and prints output.

pub mod account;
pub mod entry;
pub mod export;

pub use account::{handle_account_command, AccountCommands};
pub use entry::{
    handle_add, handle_clear, handle_delete, handle_edit, handle_find, handle_list,
    handle_summary, handle_undo, AddArgs, ClearArgs, DeleteArgs, EditArgs, FindArgs,
};
pub use export::{handle_export_command, ExportArgs};

use crate::commands::Command;
use crate::config::Settings;
use crate::display::format_entry_list;
use crate::error::TallyResult;
use crate::services::ActiveAccount;
use crate::storage::Storage;

/// Load state, run one structured command, persist, and print the result
///
/// The undo snapshot slot is hydrated from disk before execution and written
/// back after, so single-level undo works across process invocations.
pub(crate) fn run_command(
    storage: &Storage,
    settings: &Settings,
    command: &dyn Command,
) -> TallyResult<()> {
    let mut book = storage.book.load(&settings.default_account)?;
    let mut active = ActiveAccount::new(book.active_account());

    if let Some(previous) = storage.book.load_previous()? {
        active.load_previous_state(previous);
    }

    let result = command.execute(&mut book, &mut active)?;

    storage.book.save(&book)?;
    match active.previous_state() {
        Some(previous) => storage.book.save_previous(previous)?,
        None => storage.book.clear_previous()?,
    }

    println!("{}", result.message());
    if result.is_entry_list_changed() {
        print_entry_views(&active, settings);
    }

    Ok(())
}

/// Print the (possibly filtered) entry views of the active account
fn print_entry_views(active: &ActiveAccount, settings: &Settings) {
    let symbol = &settings.currency_symbol;
    println!();
    println!("Account: {}", active.name());
    print!(
        "{}",
        format_entry_list("Expenses", &active.filtered_expenses(), symbol)
    );
    print!(
        "{}",
        format_entry_list("Revenues", &active.filtered_revenues(), symbol)
    );
}

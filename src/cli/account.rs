//! Account CLI commands
//!
//! Implements CLI commands for account management.

use clap::Subcommand;

use crate::commands::SwitchCommand;
use crate::config::Settings;
use crate::display::format_account_list;
use crate::error::TallyResult;
use crate::models::Account;
use crate::storage::Storage;

use super::run_command;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Create a new account
    New {
        /// Account name
        name: String,
    },
    /// List all accounts with their totals
    List,
    /// Switch the active account
    Switch {
        /// Account name
        name: String,
    },
    /// Remove an account
    Remove {
        /// Account name
        name: String,
    },
}

/// Handle an account command
pub fn handle_account_command(
    storage: &Storage,
    settings: &Settings,
    cmd: AccountCommands,
) -> TallyResult<()> {
    match cmd {
        AccountCommands::New { name } => {
            let mut book = storage.book.load(&settings.default_account)?;
            book.add_account(Account::new(name.trim()))?;
            storage.book.save(&book)?;

            println!("Created account: {}", name.trim());
            println!("Switch to it with 'tally account switch {}'", name.trim());
        }

        AccountCommands::List => {
            let book = storage.book.load(&settings.default_account)?;
            print!("{}", format_account_list(&book, &settings.currency_symbol));
        }

        AccountCommands::Switch { name } => {
            run_command(storage, settings, &SwitchCommand::new(name))?;
        }

        AccountCommands::Remove { name } => {
            let mut book = storage.book.load(&settings.default_account)?;
            let removed = book.remove_account(&name)?;
            storage.book.save(&book)?;
            // The snapshot may belong to the removed account
            storage.book.clear_previous()?;

            println!("Removed account: {}", removed.name());
            println!("Active account is now: {}", book.active_name());
        }
    }

    Ok(())
}

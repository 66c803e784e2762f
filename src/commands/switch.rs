//! Switch command
//!
//! Makes a different account the active one. The working copy is committed
//! first, then replaced wholesale by the newly-active account's data.

use super::{Command, CommandResult};
use crate::error::TallyResult;
use crate::models::Book;
use crate::services::ActiveAccount;

/// Switches the active account by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchCommand {
    name: String,
}

impl SwitchCommand {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Command for SwitchCommand {
    fn execute(&self, book: &mut Book, active: &mut ActiveAccount) -> TallyResult<CommandResult> {
        book.set_account(active.current_account());
        book.set_active(&self.name)?;
        active.replace_account(book.active_account());

        Ok(CommandResult::entry_list_changed(format!(
            "Switched to account: {}",
            book.active_name()
        )))
    }
}

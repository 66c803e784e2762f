//! Clear command
//!
//! Clears all entries in the targeted list(s) of the active account.

use super::{Command, CommandResult, Target};
use crate::error::TallyResult;
use crate::models::Book;
use crate::services::ActiveAccount;

/// Message produced when both lists are cleared
pub const MESSAGE_CLEAR_BOTH_SUCCESS: &str = "Cleared all expenses and revenues";

/// Clears the expense list, the revenue list, or both
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearCommand {
    target: Target,
}

impl ClearCommand {
    pub fn new(target: Target) -> Self {
        Self { target }
    }
}

impl Command for ClearCommand {
    fn execute(&self, book: &mut Book, active: &mut ActiveAccount) -> TallyResult<CommandResult> {
        // Snapshot unconditionally, before looking at the target. A second
        // clear in a row loses the ability to undo past the most recent one.
        active.set_previous_state();

        match self.target {
            Target::Both => {
                active.clear_expenses();
                active.clear_revenues();
            }
            Target::Expense => active.clear_expenses(),
            Target::Revenue => active.clear_revenues(),
        }

        book.set_account(active.current_account());

        let message = match self.target.category() {
            None => MESSAGE_CLEAR_BOTH_SUCCESS.to_string(),
            Some(category) => format!("Cleared all {}s", category),
        };
        Ok(CommandResult::entry_list_changed(message))
    }
}

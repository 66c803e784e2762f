//! Undo command
//!
//! Restores the account from the retained pre-mutation snapshot. Only one
//! level of history exists; a successful undo consumes it.

use super::{Command, CommandResult};
use crate::error::{TallyError, TallyResult};
use crate::models::Book;
use crate::services::ActiveAccount;

/// Message produced when no snapshot is retained
pub const MESSAGE_NOTHING_TO_UNDO: &str = "Nothing to undo";

/// Restores the most recent pre-mutation account state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UndoCommand;

impl UndoCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for UndoCommand {
    fn execute(&self, book: &mut Book, active: &mut ActiveAccount) -> TallyResult<CommandResult> {
        if !active.restore_previous_state() {
            return Err(TallyError::Validation(MESSAGE_NOTHING_TO_UNDO.into()));
        }

        book.set_account(active.current_account());
        Ok(CommandResult::entry_list_changed("Undid the last change"))
    }
}

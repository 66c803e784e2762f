//! List command
//!
//! Resets both filtered views to show every entry.

use super::{Command, CommandResult};
use crate::error::TallyResult;
use crate::models::Book;
use crate::services::ActiveAccount;

/// Shows all entries again after a find
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCommand;

impl ListCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ListCommand {
    fn execute(&self, _book: &mut Book, active: &mut ActiveAccount) -> TallyResult<CommandResult> {
        active.reset_filters();
        Ok(CommandResult::entry_list_changed("Listed all entries"))
    }
}

//! Delete command
//!
//! Removes the entry at a displayed position in one of the filtered views.

use super::{Command, CommandResult};
use crate::error::{TallyError, TallyResult};
use crate::models::{Book, Category, Entry};
use crate::services::ActiveAccount;

/// Deletes one entry, addressed by its 1-based index in the filtered view
/// of the given category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteCommand {
    category: Category,
    index: usize,
}

impl DeleteCommand {
    pub fn new(category: Category, index: usize) -> Self {
        Self { category, index }
    }

    fn resolve(&self, active: &ActiveAccount) -> TallyResult<Entry> {
        let view = active.filtered_entries(self.category);
        self.index
            .checked_sub(1)
            .and_then(|i| view.get(i))
            .map(|entry| (*entry).clone())
            .ok_or_else(|| {
                TallyError::Validation(format!(
                    "The {} index provided is invalid: {}",
                    self.category, self.index
                ))
            })
    }
}

impl Command for DeleteCommand {
    fn execute(&self, book: &mut Book, active: &mut ActiveAccount) -> TallyResult<CommandResult> {
        let target = self.resolve(active)?;

        active.set_previous_state();
        active.remove_entry(&target)?;
        book.set_account(active.current_account());

        Ok(CommandResult::entry_list_changed(format!(
            "Deleted {}: {}",
            self.category, target
        )))
    }
}

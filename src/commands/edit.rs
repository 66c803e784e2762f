//! Edit command
//!
//! Replaces an entry in place, preserving its position in the list.

use chrono::NaiveDate;

use super::{Command, CommandResult};
use crate::error::{TallyError, TallyResult};
use crate::models::{Book, Category, Entry, Money};
use crate::services::ActiveAccount;

/// Edits one entry, addressed by its 1-based index in the filtered view of
/// the given category
///
/// The category of an entry is immutable; an edit never moves an entry
/// between lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    category: Category,
    index: usize,
    description: Option<String>,
    amount: Option<Money>,
    date: Option<NaiveDate>,
}

impl EditCommand {
    pub fn new(
        category: Category,
        index: usize,
        description: Option<String>,
        amount: Option<Money>,
        date: Option<NaiveDate>,
    ) -> Self {
        Self {
            category,
            index,
            description,
            amount,
            date,
        }
    }

    fn has_edits(&self) -> bool {
        self.description.is_some() || self.amount.is_some() || self.date.is_some()
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

    fn apply(&self, target: &Entry) -> Entry {
        let mut edited = target.clone();
        if let Some(description) = &self.description {
            edited = edited.with_description(description.clone());
        }
        if let Some(amount) = self.amount {
            edited = edited.with_amount(amount);
        }
        if let Some(date) = self.date {
            edited = edited.with_date(date);
        }
        edited
    }
}

impl Command for EditCommand {
    fn execute(&self, book: &mut Book, active: &mut ActiveAccount) -> TallyResult<CommandResult> {
        if !self.has_edits() {
            return Err(TallyError::Validation(
                "At least one field to edit must be provided".into(),
            ));
        }

        let target = self.resolve(active)?;
        let edited = self.apply(&target);
        edited
            .validate()
            .map_err(|e| TallyError::Validation(e.to_string()))?;

        active.set_previous_state();
        active.set_entry(&target, edited.clone())?;
        book.set_account(active.current_account());

        Ok(CommandResult::entry_list_changed(format!(
            "Edited {}: {}",
            self.category, edited
        )))
    }
}

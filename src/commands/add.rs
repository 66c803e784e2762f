//! Add command
//!
//! Appends a new entry to the active account.

use super::{Command, CommandResult};
use crate::error::{TallyError, TallyResult};
use crate::models::{Book, Entry};
use crate::services::ActiveAccount;

/// Adds a single entry to the active account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    entry: Entry,
}

impl AddCommand {
    pub fn new(entry: Entry) -> Self {
        Self { entry }
    }
}

impl Command for AddCommand {
    fn execute(&self, book: &mut Book, active: &mut ActiveAccount) -> TallyResult<CommandResult> {
        self.entry
            .validate()
            .map_err(|e| TallyError::Validation(e.to_string()))?;

        active.set_previous_state();
        active.add_entry(self.entry.clone())?;
        book.set_account(active.current_account());

        Ok(CommandResult::entry_list_changed(format!(
            "New {} added: {}",
            self.entry.category(),
            self.entry
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, Money};
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, d).unwrap()
    }

    fn setup() -> (Book, ActiveAccount) {
        let account = Account::new("main");
        (Book::new(account.clone()), ActiveAccount::new(&account))
    }

    #[test]
    fn test_add_expense() {
        let (mut book, mut active) = setup();
        let entry = Entry::expense("coffee", Money::from_cents(1000), date(1));

        let result = AddCommand::new(entry)
            .execute(&mut book, &mut active)
            .unwrap();

        assert_eq!(result.message(), "New expense added: coffee ($10.00)");
        assert!(result.is_entry_list_changed());
        assert_eq!(active.total_expenses(), Money::from_cents(1000));
        assert_eq!(book.active_account().total_expense(), Money::from_cents(1000));
    }

    #[test]
    fn test_add_revenue() {
        let (mut book, mut active) = setup();
        let entry = Entry::revenue("salary", Money::from_cents(500000), date(1));

        let result = AddCommand::new(entry)
            .execute(&mut book, &mut active)
            .unwrap();

        assert_eq!(result.message(), "New revenue added: salary ($5000.00)");
        assert_eq!(active.total_revenue(), Money::from_cents(500000));
    }

    #[test]
    fn test_add_duplicate_fails_without_mutating() {
        let (mut book, mut active) = setup();
        let entry = Entry::expense("coffee", Money::from_cents(350), date(1));

        AddCommand::new(entry.clone())
            .execute(&mut book, &mut active)
            .unwrap();
        let result = AddCommand::new(entry).execute(&mut book, &mut active);

        assert!(result.unwrap_err().is_duplicate());
        assert_eq!(active.filtered_expenses().len(), 1);
        assert_eq!(active.total_expenses(), Money::from_cents(350));
    }

    #[test]
    fn test_add_invalid_entry_fails_validation() {
        let (mut book, mut active) = setup();
        let entry = Entry::expense("", Money::from_cents(350), date(1));

        let result = AddCommand::new(entry).execute(&mut book, &mut active);
        assert!(result.unwrap_err().is_validation());
        assert!(book.active_account().expenses().is_empty());
    }

    #[test]
    fn test_add_negative_amount_fails_validation() {
        let (mut book, mut active) = setup();
        let entry = Entry::expense("refund", Money::from_cents(-100), date(1));

        let result = AddCommand::new(entry).execute(&mut book, &mut active);
        assert!(result.unwrap_err().is_validation());
    }

    #[test]
    fn test_add_is_undoable() {
        let (mut book, mut active) = setup();
        let entry = Entry::expense("coffee", Money::from_cents(350), date(1));

        AddCommand::new(entry)
            .execute(&mut book, &mut active)
            .unwrap();
        assert!(active.restore_previous_state());
        assert!(active.current_account().expenses().is_empty());
    }
}

//! Account model
//!
//! An account owns two ordered sequences of entries, one per category.
//! Insertion order is significant for display; aggregates are computed over
//! the full sequences regardless of order. Neither sequence ever contains
//! two value-equal entries.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::entry::{Category, Entry};
use super::money::Money;

/// A named account holding expense and revenue entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    name: String,
    expenses: Vec<Entry>,
    revenues: Vec<Entry>,
}

impl Account {
    /// Create a new empty account
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expenses: Vec::new(),
            revenues: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The expense sequence, in insertion order
    pub fn expenses(&self) -> &[Entry] {
        &self.expenses
    }

    /// The revenue sequence, in insertion order
    pub fn revenues(&self) -> &[Entry] {
        &self.revenues
    }

    /// The sequence holding entries of the given category
    pub fn entries(&self, category: Category) -> &[Entry] {
        match category {
            Category::Expense => &self.expenses,
            Category::Revenue => &self.revenues,
        }
    }

    fn entries_mut(&mut self, category: Category) -> &mut Vec<Entry> {
        match category {
            Category::Expense => &mut self.expenses,
            Category::Revenue => &mut self.revenues,
        }
    }

    /// Membership test by value equality, within the entry's own category
    pub fn has_entry(&self, entry: &Entry) -> bool {
        self.entries(entry.category()).contains(entry)
    }

    /// Append an entry to its category's sequence
    pub fn add_entry(&mut self, entry: Entry) -> Result<(), EntryError> {
        if self.has_entry(&entry) {
            return Err(EntryError::DuplicateEntry(entry));
        }

        self.entries_mut(entry.category()).push(entry);
        Ok(())
    }

    /// Remove an entry from its category's sequence
    pub fn remove_entry(&mut self, entry: &Entry) -> Result<(), EntryError> {
        let entries = self.entries_mut(entry.category());
        match entries.iter().position(|e| e == entry) {
            Some(index) => {
                entries.remove(index);
                Ok(())
            }
            None => Err(EntryError::EntryNotFound(entry.clone())),
        }
    }

    /// Replace `target` with `edited` in place, preserving its position
    ///
    /// The category tag is immutable, so target and edited must share one;
    /// a mismatch is a caller bug.
    pub fn set_entry(&mut self, target: &Entry, edited: Entry) -> Result<(), EntryError> {
        assert_eq!(
            target.category(),
            edited.category(),
            "set_entry cannot move an entry between categories"
        );

        let entries = self.entries_mut(target.category());
        let index = entries
            .iter()
            .position(|e| e == target)
            .ok_or_else(|| EntryError::EntryNotFound(target.clone()))?;

        if edited != *target && entries.contains(&edited) {
            return Err(EntryError::DuplicateEntry(edited));
        }

        entries[index] = edited;
        Ok(())
    }

    /// Empty the expense sequence; no error when already empty
    pub fn clear_expenses(&mut self) {
        self.expenses.clear();
    }

    /// Empty the revenue sequence; no error when already empty
    pub fn clear_revenues(&mut self) {
        self.revenues.clear();
    }

    /// Sum of all expense amounts
    pub fn total_expense(&self) -> Money {
        self.expenses.iter().map(|e| e.amount()).sum()
    }

    /// Sum of all revenue amounts
    pub fn total_revenue(&self) -> Money {
        self.revenues.iter().map(|e| e.amount()).sum()
    }

    /// Total revenue minus total expense; may be negative
    pub fn profit(&self) -> Money {
        self.total_revenue() - self.total_expense()
    }

    /// Overwrite all contents from another account
    pub fn reset_data(&mut self, other: &Account) {
        self.name = other.name.clone();
        self.expenses = other.expenses.clone();
        self.revenues = other.revenues.clone();
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Recoverable data-model errors for entry mutations
///
/// The mutation does not occur when one of these is returned; the account is
/// left unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    DuplicateEntry(Entry),
    EntryNotFound(Entry),
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateEntry(entry) => write!(f, "Entry already exists: {}", entry),
            Self::EntryNotFound(entry) => write!(f, "Entry not found: {}", entry),
        }
    }
}

impl std::error::Error for EntryError {}

impl From<EntryError> for crate::error::TallyError {
    fn from(err: EntryError) -> Self {
        match err {
            EntryError::DuplicateEntry(entry) => Self::duplicate_entry(entry.to_string()),
            EntryError::EntryNotFound(entry) => Self::entry_not_found(entry.to_string()),
        }
    }
}

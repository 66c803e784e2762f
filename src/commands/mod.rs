//! Command layer for tally-cli
//!
//! Stateless command objects that validate their inputs, mutate the active
//! account (recording pre-mutation state for undo), commit the new account
//! state back into the book, and return a structured result.
//!
//! Every command follows the same single-shot sequence: validate, snapshot
//! for undo, mutate, commit, produce a result.

pub mod add;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod find;
pub mod list;
pub mod switch;
pub mod undo;

pub use add::AddCommand;
pub use clear::ClearCommand;
pub use delete::DeleteCommand;
pub use edit::EditCommand;
pub use find::FindCommand;
pub use list::ListCommand;
pub use switch::SwitchCommand;
pub use undo::UndoCommand;

use std::fmt;

use crate::error::TallyResult;
use crate::models::{Book, Category};
use crate::services::ActiveAccount;

/// A structured, already-validated command
pub trait Command {
    /// Run the command against the book and the active account
    fn execute(&self, book: &mut Book, active: &mut ActiveAccount) -> TallyResult<CommandResult>;
}

/// Result of a successfully executed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    message: String,
    entry_list_changed: bool,
}

impl CommandResult {
    /// A plain result message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            entry_list_changed: false,
        }
    }

    /// A result signaling that the displayed entry lists need refreshing
    pub fn entry_list_changed(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            entry_list_changed: true,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_entry_list_changed(&self) -> bool {
        self.entry_list_changed
    }
}

/// What a command applies to: one entry category, or both
///
/// An explicit variant for "both" instead of an absent category, so command
/// equality is total over every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Both,
    Expense,
    Revenue,
}

impl Target {
    /// The single category this target names, if it names one
    pub fn category(self) -> Option<Category> {
        match self {
            Self::Both => None,
            Self::Expense => Some(Category::Expense),
            Self::Revenue => Some(Category::Revenue),
        }
    }
}

impl From<Category> for Target {
    fn from(category: Category) -> Self {
        match category {
            Category::Expense => Self::Expense,
            Category::Revenue => Self::Revenue,
        }
    }
}

impl From<Option<Category>> for Target {
    fn from(category: Option<Category>) -> Self {
        match category {
            Some(category) => category.into(),
            None => Self::Both,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Both => write!(f, "expenses and revenues"),
            Self::Expense => write!(f, "expenses"),
            Self::Revenue => write!(f, "revenues"),
        }
    }
}

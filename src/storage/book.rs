//! Book repository for JSON storage
//!
//! Persists the account book and the single-level undo snapshot. The
//! on-disk form round-trips losslessly: account order, entry order, dates,
//! amounts, and the active-account name all survive a save/load cycle.

use std::path::PathBuf;

use crate::config::TallyPaths;
use crate::error::TallyError;
use crate::models::{Account, Book};

use super::file_io::{read_json_optional, remove_if_exists, write_json_atomic};

/// Repository for book and undo-snapshot persistence
pub struct BookStore {
    book_path: PathBuf,
    undo_path: PathBuf,
}

impl BookStore {
    /// Create a new book repository
    pub fn new(paths: &TallyPaths) -> Self {
        Self {
            book_path: paths.book_file(),
            undo_path: paths.undo_file(),
        }
    }

    /// Load the book from disk
    ///
    /// When no book exists yet, returns a fresh book containing one empty
    /// account with the given name.
    pub fn load(&self, default_account_name: &str) -> Result<Book, TallyError> {
        match read_json_optional::<Book, _>(&self.book_path)? {
            Some(book) => {
                book.validate()?;
                Ok(book)
            }
            None => Ok(Book::new(Account::new(default_account_name))),
        }
    }

    /// Save the book to disk
    pub fn save(&self, book: &Book) -> Result<(), TallyError> {
        write_json_atomic(&self.book_path, book)
    }

    /// Load the retained undo snapshot, if one is persisted
    pub fn load_previous(&self) -> Result<Option<Account>, TallyError> {
        read_json_optional(&self.undo_path)
    }

    /// Persist the undo snapshot, overwriting any earlier one
    pub fn save_previous(&self, account: &Account) -> Result<(), TallyError> {
        write_json_atomic(&self.undo_path, account)
    }

    /// Remove the persisted undo snapshot
    pub fn clear_previous(&self) -> Result<(), TallyError> {
        remove_if_exists(&self.undo_path)
    }
}

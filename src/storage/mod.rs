//! Storage layer for tally-cli
//!
//! JSON file storage with atomic writes and automatic directory creation.

pub mod book;
pub mod file_io;

pub use book::BookStore;
pub use file_io::{read_json, write_json_atomic};

use crate::config::TallyPaths;
use crate::error::TallyError;

/// Main storage coordinator
pub struct Storage {
    paths: TallyPaths,
    pub book: BookStore,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: TallyPaths) -> Result<Self, TallyError> {
        paths.ensure_directories()?;

        Ok(Self {
            book: BookStore::new(&paths),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &TallyPaths {
        &self.paths
    }
}

//! tally-cli - Command-line expense and revenue tracker
//!
//! This library provides the core functionality for the tally-cli
//! application: named accounts holding expense and revenue entries, mutated
//! through structured commands with single-level undo.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, entries, accounts, the book)
//! - `services`: The active-account manager commands operate through
//! - `commands`: Structured command objects (add, delete, edit, clear, ...)
//! - `storage`: JSON file storage layer
//! - `display`: Terminal output formatting
//! - `export`: CSV/JSON/YAML data export
//! - `cli`: clap argument definitions and command handlers

pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::TallyError;

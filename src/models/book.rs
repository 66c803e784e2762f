//! Book model
//!
//! The book is the persisted universe of accounts: every account the user
//! has created, in creation order, plus the name of the account commands
//! currently operate on. After any command commits, the active account's
//! committed form is always reachable from the book.

use serde::{Deserialize, Serialize};

use super::account::Account;
use crate::error::{TallyError, TallyResult};

/// All accounts plus the name of the active one
///
/// Invariants: at least one account; `active` always names an account in
/// the list; account names are unique (case-insensitive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    accounts: Vec<Account>,
    active: String,
}

impl Book {
    /// Create a book containing a single account, which becomes active
    pub fn new(account: Account) -> Self {
        let active = account.name().to_string();
        Self {
            accounts: vec![account],
            active,
        }
    }

    /// All accounts, in creation order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// All account names, in creation order
    pub fn account_names(&self) -> Vec<&str> {
        self.accounts.iter().map(|a| a.name()).collect()
    }

    /// Look up an account by name (case-insensitive)
    pub fn find_account(&self, name: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|a| a.name().eq_ignore_ascii_case(name))
    }

    pub fn has_account(&self, name: &str) -> bool {
        self.find_account(name).is_some()
    }

    /// The name of the active account
    pub fn active_name(&self) -> &str {
        &self.active
    }

    /// The active account
    pub fn active_account(&self) -> &Account {
        self.find_account(&self.active)
            .expect("book invariant: active account always exists")
    }

    /// Add a new account to the book
    pub fn add_account(&mut self, account: Account) -> TallyResult<()> {
        if account.name().trim().is_empty() {
            return Err(TallyError::Validation(
                "Account name cannot be empty".into(),
            ));
        }
        if self.has_account(account.name()) {
            return Err(TallyError::duplicate_account(account.name()));
        }

        self.accounts.push(account);
        Ok(())
    }

    /// Remove an account by name
    ///
    /// The last remaining account cannot be removed. Removing the active
    /// account re-targets `active` to the first remaining one.
    pub fn remove_account(&mut self, name: &str) -> TallyResult<Account> {
        if self.accounts.len() == 1 {
            return Err(TallyError::Validation(
                "Cannot remove the only account".into(),
            ));
        }

        let index = self
            .accounts
            .iter()
            .position(|a| a.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| TallyError::account_not_found(name))?;

        let removed = self.accounts.remove(index);
        if removed.name().eq_ignore_ascii_case(&self.active) {
            self.active = self.accounts[0].name().to_string();
        }

        Ok(removed)
    }

    /// Make the named account the active one
    pub fn set_active(&mut self, name: &str) -> TallyResult<()> {
        let account = self
            .find_account(name)
            .ok_or_else(|| TallyError::account_not_found(name))?;

        self.active = account.name().to_string();
        Ok(())
    }

    /// Commit the given account as the new record for the active key
    ///
    /// The committed account replaces the active account's stored data; if
    /// its name changed, the active key follows it.
    pub fn set_account(&mut self, account: Account) {
        let index = self
            .accounts
            .iter()
            .position(|a| a.name().eq_ignore_ascii_case(&self.active))
            .expect("book invariant: active account always exists");

        self.active = account.name().to_string();
        self.accounts[index] = account;
    }

    /// Check the book invariants; used after deserialization
    pub fn validate(&self) -> TallyResult<()> {
        if self.accounts.is_empty() {
            return Err(TallyError::Validation(
                "Book must contain at least one account".into(),
            ));
        }

        if !self.has_account(&self.active) {
            return Err(TallyError::Validation(format!(
                "Active account '{}' does not exist in the book",
                self.active
            )));
        }

        for (i, account) in self.accounts.iter().enumerate() {
            let clash = self.accounts[i + 1..]
                .iter()
                .any(|other| other.name().eq_ignore_ascii_case(account.name()));
            if clash {
                return Err(TallyError::Validation(format!(
                    "Duplicate account name '{}' in the book",
                    account.name()
                )));
            }
        }

        Ok(())
    }
}

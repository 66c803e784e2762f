//! Active account manager
//!
//! Wraps the account currently being operated on. The manager exclusively
//! owns a working copy of the account (the book never aliases it), a
//! single-level undo snapshot, and one filter predicate per entry category.
//!
//! Filtered views are computed on demand over the live sequences, so they
//! reflect every mutation the instant it occurs. Aggregates are always
//! computed over the unfiltered collections; filters affect display only.

use crate::models::{Account, Category, Entry, EntryError, Money};

/// Filter predicate over entries; must be total (never panic)
pub type EntryPredicate = Box<dyn Fn(&Entry) -> bool>;

/// Manager for the account commands operate on
pub struct ActiveAccount {
    account: Account,
    previous_state: Option<Account>,
    expense_filter: Option<EntryPredicate>,
    revenue_filter: Option<EntryPredicate>,
}

impl ActiveAccount {
    /// Initialize the manager with a copy of the given account
    pub fn new(account: &Account) -> Self {
        Self {
            account: account.clone(),
            previous_state: None,
            expense_filter: None,
            revenue_filter: None,
        }
    }

    /// Swap in a different account (account switch)
    ///
    /// Drops any undo snapshot and resets both filters: a snapshot taken
    /// from one account must not be restorable into another.
    pub fn replace_account(&mut self, account: &Account) {
        self.account.reset_data(account);
        self.previous_state = None;
        self.reset_filters();
    }

    /// A deep copy of the working account, suitable for committing into the
    /// book
    pub fn current_account(&self) -> Account {
        self.account.clone()
    }

    /// The name of the working account
    pub fn name(&self) -> &str {
        self.account.name()
    }

    //=========== Undo snapshot ===========

    /// Capture the current account state for undo
    ///
    /// Only the most recent snapshot is retained; calling this twice in a
    /// row discards the earlier snapshot irrecoverably.
    pub fn set_previous_state(&mut self) {
        self.previous_state = Some(self.account.clone());
    }

    pub fn has_previous_state(&self) -> bool {
        self.previous_state.is_some()
    }

    /// Borrow the retained snapshot, if any (persisted by the CLI layer)
    pub fn previous_state(&self) -> Option<&Account> {
        self.previous_state.as_ref()
    }

    /// Hydrate the snapshot slot, e.g. from storage
    pub fn load_previous_state(&mut self, account: Account) {
        self.previous_state = Some(account);
    }

    /// Restore the account from the retained snapshot, consuming it
    ///
    /// Returns false when no snapshot is retained.
    pub fn restore_previous_state(&mut self) -> bool {
        match self.previous_state.take() {
            Some(previous) => {
                self.account = previous;
                true
            }
            None => false,
        }
    }

    //=========== Mutation delegation ===========

    pub fn has_entry(&self, entry: &Entry) -> bool {
        self.account.has_entry(entry)
    }

    pub fn add_entry(&mut self, entry: Entry) -> Result<(), EntryError> {
        self.account.add_entry(entry)
    }

    pub fn remove_entry(&mut self, entry: &Entry) -> Result<(), EntryError> {
        self.account.remove_entry(entry)
    }

    pub fn set_entry(&mut self, target: &Entry, edited: Entry) -> Result<(), EntryError> {
        self.account.set_entry(target, edited)
    }

    pub fn clear_expenses(&mut self) {
        self.account.clear_expenses();
    }

    pub fn clear_revenues(&mut self) {
        self.account.clear_revenues();
    }

    //=========== Filtered views ===========

    /// Install a new predicate for the expense view
    pub fn update_filtered_expense_list(&mut self, predicate: impl Fn(&Entry) -> bool + 'static) {
        self.expense_filter = Some(Box::new(predicate));
    }

    /// Install a new predicate for the revenue view
    pub fn update_filtered_revenue_list(&mut self, predicate: impl Fn(&Entry) -> bool + 'static) {
        self.revenue_filter = Some(Box::new(predicate));
    }

    /// Remove both predicates; the views show every entry again
    pub fn reset_filters(&mut self) {
        self.expense_filter = None;
        self.revenue_filter = None;
    }

    /// Expense entries satisfying the installed predicate, in insertion order
    pub fn filtered_expenses(&self) -> Vec<&Entry> {
        Self::filtered(self.account.entries(Category::Expense), &self.expense_filter)
    }

    /// Revenue entries satisfying the installed predicate, in insertion order
    pub fn filtered_revenues(&self) -> Vec<&Entry> {
        Self::filtered(self.account.entries(Category::Revenue), &self.revenue_filter)
    }

    /// The filtered view for the given category
    pub fn filtered_entries(&self, category: Category) -> Vec<&Entry> {
        match category {
            Category::Expense => self.filtered_expenses(),
            Category::Revenue => self.filtered_revenues(),
        }
    }

    fn filtered<'a>(entries: &'a [Entry], filter: &Option<EntryPredicate>) -> Vec<&'a Entry> {
        match filter {
            Some(predicate) => entries.iter().filter(|e| predicate(e)).collect(),
            None => entries.iter().collect(),
        }
    }

    //=========== Aggregates (unfiltered) ===========

    pub fn total_expenses(&self) -> Money {
        self.account.total_expense()
    }

    pub fn total_revenue(&self) -> Money {
        self.account.total_revenue()
    }

    pub fn profit(&self) -> Money {
        self.account.profit()
    }
}

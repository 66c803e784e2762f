//! Entry model
//!
//! Represents a single financial record. Every entry is tagged as either an
//! expense or a revenue; the tag is fixed at construction and selects which
//! of an account's two sequences the entry lives in.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// The kind of financial record an entry represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Money going out
    Expense,
    /// Money coming in
    Revenue,
}

impl Category {
    /// Parse a category from a user-supplied string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "expense" | "expenses" | "e" => Some(Self::Expense),
            "revenue" | "revenues" | "r" => Some(Self::Revenue),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Lowercase on purpose: command result messages interpolate this
        // directly ("Cleared all expenses").
        match self {
            Self::Expense => write!(f, "expense"),
            Self::Revenue => write!(f, "revenue"),
        }
    }
}

/// A single financial record
///
/// Equality is value-based over all fields; two entries with the same
/// category, description, amount, and date are the same entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    category: Category,
    description: String,
    amount: Money,
    date: NaiveDate,
}

impl Entry {
    /// Create a new entry
    pub fn new(
        category: Category,
        description: impl Into<String>,
        amount: Money,
        date: NaiveDate,
    ) -> Self {
        Self {
            category,
            description: description.into(),
            amount,
            date,
        }
    }

    /// Create a new expense entry
    pub fn expense(description: impl Into<String>, amount: Money, date: NaiveDate) -> Self {
        Self::new(Category::Expense, description, amount, date)
    }

    /// Create a new revenue entry
    pub fn revenue(description: impl Into<String>, amount: Money, date: NaiveDate) -> Self {
        Self::new(Category::Revenue, description, amount, date)
    }

    /// The category tag; fixed at construction
    pub fn category(&self) -> Category {
        self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Return a copy of this entry with the given description
    pub fn with_description(&self, description: impl Into<String>) -> Self {
        let mut edited = self.clone();
        edited.description = description.into();
        edited
    }

    /// Return a copy of this entry with the given amount
    pub fn with_amount(&self, amount: Money) -> Self {
        let mut edited = self.clone();
        edited.amount = amount;
        edited
    }

    /// Return a copy of this entry with the given date
    pub fn with_date(&self, date: NaiveDate) -> Self {
        let mut edited = self.clone();
        edited.date = date;
        edited
    }

    /// Validate the entry
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if self.description.trim().is_empty() {
            return Err(EntryValidationError::EmptyDescription);
        }

        if self.amount.is_negative() {
            return Err(EntryValidationError::NegativeAmount(self.amount));
        }

        Ok(())
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description, self.amount)
    }
}

/// Validation errors for entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    EmptyDescription,
    NegativeAmount(Money),
}

impl fmt::Display for EntryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Entry description cannot be empty"),
            Self::NegativeAmount(amount) => {
                write!(f, "Entry amount cannot be negative (got {})", amount)
            }
        }
    }
}

impl std::error::Error for EntryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_constructors_tag_category() {
        let e = Entry::expense("coffee", Money::from_cents(350), date(2026, 8, 1));
        assert_eq!(e.category(), Category::Expense);

        let r = Entry::revenue("salary", Money::from_cents(500000), date(2026, 8, 1));
        assert_eq!(r.category(), Category::Revenue);
    }

    #[test]
    fn test_value_equality() {
        let a = Entry::expense("coffee", Money::from_cents(350), date(2026, 8, 1));
        let b = Entry::expense("coffee", Money::from_cents(350), date(2026, 8, 1));
        assert_eq!(a, b);

        // Any differing field breaks equality
        assert_ne!(a, b.with_amount(Money::from_cents(351)));
        assert_ne!(a, b.with_description("tea"));
        assert_ne!(a, b.with_date(date(2026, 8, 2)));
        assert_ne!(
            a,
            Entry::revenue("coffee", Money::from_cents(350), date(2026, 8, 1))
        );
    }

    #[test]
    fn test_with_helpers_preserve_category() {
        let e = Entry::expense("coffee", Money::from_cents(350), date(2026, 8, 1));
        let edited = e.with_description("espresso").with_amount(Money::from_cents(400));
        assert_eq!(edited.category(), Category::Expense);
        assert_eq!(edited.description(), "espresso");
        assert_eq!(edited.amount().cents(), 400);
        assert_eq!(edited.date(), e.date());
    }

    #[test]
    fn test_validation() {
        let ok = Entry::expense("coffee", Money::from_cents(350), date(2026, 8, 1));
        assert!(ok.validate().is_ok());

        let empty = Entry::expense("   ", Money::from_cents(350), date(2026, 8, 1));
        assert_eq!(empty.validate(), Err(EntryValidationError::EmptyDescription));

        let negative = Entry::expense("refund?", Money::from_cents(-100), date(2026, 8, 1));
        assert!(matches!(
            negative.validate(),
            Err(EntryValidationError::NegativeAmount(_))
        ));
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(Category::parse("expense"), Some(Category::Expense));
        assert_eq!(Category::parse("Revenues"), Some(Category::Revenue));
        assert_eq!(Category::parse("r"), Some(Category::Revenue));
        assert_eq!(Category::parse("income"), None);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Expense.to_string(), "expense");
        assert_eq!(Category::Revenue.to_string(), "revenue");
    }

    #[test]
    fn test_display() {
        let e = Entry::expense("coffee", Money::from_cents(350), date(2026, 8, 1));
        assert_eq!(format!("{}", e), "coffee ($3.50)");
    }

    #[test]
    fn test_serialization() {
        let e = Entry::revenue("salary", Money::from_cents(500000), date(2026, 8, 1));
        let json = serde_json::to_string(&e).unwrap();
        let deserialized: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(e, deserialized);
        assert!(json.contains("\"revenue\""));
    }
}

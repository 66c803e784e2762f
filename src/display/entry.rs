//! Entry display formatting
//!
//! Formats entry lists and the totals summary for terminal output.

use crate::models::{Entry, Money};

/// Format a filtered entry view as an indexed table
///
/// The index column matches the 1-based indices accepted by the delete and
/// edit commands.
pub fn format_entry_list(title: &str, entries: &[&Entry], symbol: &str) -> String {
    if entries.is_empty() {
        return format!("{}\n  (none)\n", title);
    }

    let desc_width = entries
        .iter()
        .map(|e| e.description().len())
        .max()
        .unwrap_or(11)
        .max(11);

    let amount_width = entries
        .iter()
        .map(|e| e.amount().format_with_symbol(symbol).len())
        .max()
        .unwrap_or(6)
        .max(6);

    let mut output = String::new();
    output.push_str(&format!("{}\n", title));
    output.push_str(&format!(
        "  {:>3}  {:<10}  {:<desc_width$}  {:>amount_width$}\n",
        "#",
        "Date",
        "Description",
        "Amount",
        desc_width = desc_width,
        amount_width = amount_width,
    ));
    output.push_str(&format!(
        "  {:->3}  {:-<10}  {:-<desc_width$}  {:->amount_width$}\n",
        "",
        "",
        "",
        "",
        desc_width = desc_width,
        amount_width = amount_width,
    ));

    for (i, entry) in entries.iter().enumerate() {
        output.push_str(&format!(
            "  {:>3}  {:<10}  {:<desc_width$}  {:>amount_width$}\n",
            i + 1,
            entry.date().format("%Y-%m-%d"),
            entry.description(),
            entry.amount().format_with_symbol(symbol),
            desc_width = desc_width,
            amount_width = amount_width,
        ));
    }

    output
}

/// Format the account totals summary
pub fn format_summary(
    total_expenses: Money,
    total_revenue: Money,
    profit: Money,
    symbol: &str,
) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "  Total expenses: {}\n",
        total_expenses.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Total revenue:  {}\n",
        total_revenue.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Profit:         {}\n",
        profit.format_with_symbol(symbol)
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, d).unwrap()
    }

    #[test]
    fn test_format_entry_list() {
        let coffee = Entry::expense("coffee", Money::from_cents(350), date(1));
        let rent = Entry::expense("rent", Money::from_cents(120000), date(2));
        let entries = vec![&coffee, &rent];

        let output = format_entry_list("Expenses", &entries, "$");
        assert!(output.contains("Expenses"));
        assert!(output.contains("coffee"));
        assert!(output.contains("$3.50"));
        assert!(output.contains("2026-08-02"));
        // Rows are numbered from 1
        assert!(output.contains("  1  "));
        assert!(output.contains("  2  "));
    }

    #[test]
    fn test_format_empty_entry_list() {
        let output = format_entry_list("Expenses", &[], "$");
        assert!(output.contains("(none)"));
    }

    #[test]
    fn test_format_summary() {
        let output = format_summary(
            Money::from_cents(120350),
            Money::from_cents(500000),
            Money::from_cents(379650),
            "$",
        );
        assert!(output.contains("Total expenses: $1203.50"));
        assert!(output.contains("Total revenue:  $5000.00"));
        assert!(output.contains("Profit:         $3796.50"));
    }

    #[test]
    fn test_format_summary_negative_profit() {
        let output = format_summary(
            Money::from_cents(1000),
            Money::zero(),
            Money::from_cents(-1000),
            "$",
        );
        assert!(output.contains("Profit:         -$10.00"));
    }
}

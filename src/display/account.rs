//! Account display formatting

use crate::models::Book;

/// Format the account list with totals; the active account is marked
pub fn format_account_list(book: &Book, symbol: &str) -> String {
    let name_width = book
        .accounts()
        .iter()
        .map(|a| a.name().len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "  {:<2}  {:<name_width$}  {:>12}  {:>12}  {:>12}\n",
        "",
        "Name",
        "Expenses",
        "Revenue",
        "Profit",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "  {:-<2}  {:-<name_width$}  {:->12}  {:->12}  {:->12}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for account in book.accounts() {
        let marker = if account.name() == book.active_name() {
            "*"
        } else {
            ""
        };
        output.push_str(&format!(
            "  {:<2}  {:<name_width$}  {:>12}  {:>12}  {:>12}\n",
            marker,
            account.name(),
            account.total_expense().format_with_symbol(symbol),
            account.total_revenue().format_with_symbol(symbol),
            account.profit().format_with_symbol(symbol),
            name_width = name_width,
        ));
    }

    output
}

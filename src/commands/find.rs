//! Find command
//!
//! Installs keyword predicates on the filtered views. Non-destructive: the
//! account itself is never mutated and nothing is committed.

use super::{Command, CommandResult, Target};
use crate::error::{TallyError, TallyResult};
use crate::models::{Book, Entry};
use crate::services::ActiveAccount;

/// Filters the targeted view(s) to entries whose description contains any
/// of the keywords (case-insensitive)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    keywords: Vec<String>,
    target: Target,
}

impl FindCommand {
    pub fn new(keywords: Vec<String>, target: Target) -> Self {
        Self { keywords, target }
    }

    fn predicate(&self) -> impl Fn(&Entry) -> bool + 'static {
        let needles: Vec<String> = self
            .keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();

        move |entry: &Entry| {
            let description = entry.description().to_lowercase();
            needles.iter().any(|needle| description.contains(needle))
        }
    }
}

impl Command for FindCommand {
    fn execute(&self, _book: &mut Book, active: &mut ActiveAccount) -> TallyResult<CommandResult> {
        if self.keywords.iter().all(|k| k.trim().is_empty()) {
            return Err(TallyError::Validation(
                "At least one keyword must be provided".into(),
            ));
        }

        let mut listed = 0;
        if matches!(self.target, Target::Both | Target::Expense) {
            active.update_filtered_expense_list(self.predicate());
            listed += active.filtered_expenses().len();
        }
        if matches!(self.target, Target::Both | Target::Revenue) {
            active.update_filtered_revenue_list(self.predicate());
            listed += active.filtered_revenues().len();
        }

        Ok(CommandResult::entry_list_changed(format!(
            "{} entries listed",
            listed
        )))
    }
}

//! Entry CLI commands
//!
//! Argument parsing and handlers for the entry-level commands: add, delete,
//! edit, clear, find, list, undo, and summary.

use chrono::{Local, NaiveDate};
use clap::Args;

use crate::commands::{
    AddCommand, ClearCommand, DeleteCommand, EditCommand, FindCommand, ListCommand, Target,
    UndoCommand,
};
use crate::config::Settings;
use crate::display::format_summary;
use crate::error::{TallyError, TallyResult};
use crate::models::{Category, Entry, Money};
use crate::storage::Storage;

use super::run_command;

/// Arguments for `tally add`
#[derive(Args)]
pub struct AddArgs {
    /// Entry description
    pub description: String,

    /// Amount (e.g., "10.50" or "$10.50")
    pub amount: String,

    /// Entry category (expense or revenue)
    #[arg(short, long, default_value = "expense")]
    pub category: String,

    /// Entry date (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Arguments for `tally delete`
#[derive(Args)]
pub struct DeleteArgs {
    /// Entry category (expense or revenue)
    pub category: String,

    /// Index of the entry in the displayed list
    pub index: usize,
}

/// Arguments for `tally edit`
#[derive(Args)]
pub struct EditArgs {
    /// Entry category (expense or revenue)
    pub category: String,

    /// Index of the entry in the displayed list
    pub index: usize,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    /// New amount
    #[arg(long)]
    pub amount: Option<String>,

    /// New date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for `tally clear`
#[derive(Args)]
pub struct ClearArgs {
    /// Only clear this category (expense or revenue); both when omitted
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for `tally find`
#[derive(Args)]
pub struct FindArgs {
    /// Keywords to match against entry descriptions
    #[arg(required = true)]
    pub keywords: Vec<String>,

    /// Only search this category (expense or revenue); both when omitted
    #[arg(short, long)]
    pub category: Option<String>,
}

pub fn handle_add(storage: &Storage, settings: &Settings, args: AddArgs) -> TallyResult<()> {
    let category = parse_category(&args.category)?;
    let amount = parse_amount(&args.amount)?;
    let date = parse_date(args.date.as_deref())?;

    let entry = Entry::new(category, args.description, amount, date);
    run_command(storage, settings, &AddCommand::new(entry))
}

pub fn handle_delete(storage: &Storage, settings: &Settings, args: DeleteArgs) -> TallyResult<()> {
    let category = parse_category(&args.category)?;
    run_command(storage, settings, &DeleteCommand::new(category, args.index))
}

pub fn handle_edit(storage: &Storage, settings: &Settings, args: EditArgs) -> TallyResult<()> {
    let category = parse_category(&args.category)?;
    let amount = args.amount.as_deref().map(parse_amount).transpose()?;
    let date = args
        .date
        .as_deref()
        .map(|d| parse_date(Some(d)))
        .transpose()?;

    let command = EditCommand::new(category, args.index, args.description, amount, date);
    run_command(storage, settings, &command)
}

pub fn handle_clear(storage: &Storage, settings: &Settings, args: ClearArgs) -> TallyResult<()> {
    let target = parse_target(args.category.as_deref())?;
    run_command(storage, settings, &ClearCommand::new(target))
}

pub fn handle_find(storage: &Storage, settings: &Settings, args: FindArgs) -> TallyResult<()> {
    let target = parse_target(args.category.as_deref())?;
    run_command(storage, settings, &FindCommand::new(args.keywords, target))
}

pub fn handle_list(storage: &Storage, settings: &Settings) -> TallyResult<()> {
    run_command(storage, settings, &ListCommand::new())
}

pub fn handle_undo(storage: &Storage, settings: &Settings) -> TallyResult<()> {
    run_command(storage, settings, &UndoCommand::new())
}

/// Print the totals for the active account
pub fn handle_summary(storage: &Storage, settings: &Settings) -> TallyResult<()> {
    let book = storage.book.load(&settings.default_account)?;
    let account = book.active_account();

    println!("Account: {}", account.name());
    print!(
        "{}",
        format_summary(
            account.total_expense(),
            account.total_revenue(),
            account.profit(),
            &settings.currency_symbol,
        )
    );
    Ok(())
}

fn parse_category(s: &str) -> TallyResult<Category> {
    Category::parse(s).ok_or_else(|| {
        TallyError::Validation(format!(
            "Invalid category: '{}'. Valid categories: expense, revenue",
            s
        ))
    })
}

fn parse_target(s: Option<&str>) -> TallyResult<Target> {
    match s {
        None => Ok(Target::Both),
        Some(s) => Ok(parse_category(s)?.into()),
    }
}

fn parse_amount(s: &str) -> TallyResult<Money> {
    Money::parse(s).map_err(|e| {
        TallyError::Validation(format!(
            "Invalid amount: '{}'. Use a format like '10.50'. {}",
            s, e
        ))
    })
}

fn parse_date(s: Option<&str>) -> TallyResult<NaiveDate> {
    match s {
        None => Ok(Local::now().date_naive()),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            TallyError::Validation(format!("Invalid date: '{}'. Use the format YYYY-MM-DD", s))
        }),
    }
}

use anyhow::Result;
use clap::{Parser, Subcommand};

use tally_cli::cli::{
    handle_account_command, handle_add, handle_clear, handle_delete, handle_edit,
    handle_export_command, handle_find, handle_list, handle_summary, handle_undo, AccountCommands,
    AddArgs, ClearArgs, DeleteArgs, EditArgs, ExportArgs, FindArgs,
};
use tally_cli::config::{Settings, TallyPaths};
use tally_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Command-line expense and revenue tracker",
    long_about = "tally keeps per-account lists of expense and revenue entries. \
                  Entries are added, edited, and cleared through simple commands, \
                  with a one-level undo for the last change."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new entry to the active account
    Add(AddArgs),

    /// Delete an entry by its displayed index
    Delete(DeleteArgs),

    /// Edit an entry by its displayed index
    Edit(EditArgs),

    /// Clear all entries of one or both categories
    Clear(ClearArgs),

    /// Find entries whose description matches any keyword
    Find(FindArgs),

    /// List all entries of the active account
    List,

    /// Undo the last change to the active account
    Undo,

    /// Show totals for the active account
    Summary,

    /// Account management commands
    #[command(subcommand, alias = "acc")]
    Account(AccountCommands),

    /// Export the book as CSV, JSON, or YAML
    Export(ExportArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TallyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths.clone())?;

    match cli.command {
        Some(Commands::Add(args)) => handle_add(&storage, &settings, args)?,
        Some(Commands::Delete(args)) => handle_delete(&storage, &settings, args)?,
        Some(Commands::Edit(args)) => handle_edit(&storage, &settings, args)?,
        Some(Commands::Clear(args)) => handle_clear(&storage, &settings, args)?,
        Some(Commands::Find(args)) => handle_find(&storage, &settings, args)?,
        Some(Commands::List) => handle_list(&storage, &settings)?,
        Some(Commands::Undo) => handle_undo(&storage, &settings)?,
        Some(Commands::Summary) => handle_summary(&storage, &settings)?,
        Some(Commands::Account(cmd)) => handle_account_command(&storage, &settings, cmd)?,
        Some(Commands::Export(args)) => handle_export_command(&storage, &settings, args)?,
        Some(Commands::Config) => {
            println!("tally-cli configuration");
            println!("=======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Book file:      {}", paths.book_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Default account: {}", settings.default_account);
        }
        None => {
            println!("tally - command-line expense and revenue tracker");
            println!();
            println!("Run 'tally --help' for usage information.");
            println!("Run 'tally add <description> <amount>' to record your first expense.");
        }
    }

    Ok(())
}

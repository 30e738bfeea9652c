use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_add, handle_categories, handle_chart, handle_delete, handle_export, handle_import,
    handle_list, handle_report, print_notification, AddArgs, ListArgs, ReportArgs,
};
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::services::ExpenseService;
use expense_tracker::storage::{open_repository, EXPENSES_KEY};

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Personal expense tracker",
    long_about = "Record what you spend, see daily, weekly and monthly totals, \
                  search and filter your history, and move it around as JSON."
)]
struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record an expense
    Add(AddArgs),

    /// List expenses, optionally filtered
    #[command(alias = "ls")]
    List(ListArgs),

    /// Delete an expense by ID
    #[command(alias = "rm")]
    Delete {
        /// Expense ID
        id: String,
    },

    /// Spending summaries for today, the last 7 days and the last 30 days
    Report(ReportArgs),

    /// Spending by category and over the last week
    Chart,

    /// Export all expenses as JSON
    Export {
        /// Output file ("-" for stdout), defaults to expenses-YYYY-MM-DD.json
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import expenses from a JSON file
    Import {
        /// Path to a JSON array of expenses
        path: PathBuf,
    },

    /// List the suggested categories
    Categories,

    /// Show current configuration and paths
    Config,

    /// Create the data directories and a local remote store
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    expense_tracker::init_tracing(cli.verbose);

    // Initialize paths and settings
    let paths = ExpensePaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let command = match cli.command {
        Some(Commands::Categories) => {
            handle_categories();
            return Ok(());
        }
        Some(Commands::Config) => {
            print_config(&paths, &settings);
            return Ok(());
        }
        Some(Commands::Init) => {
            println!("Initializing expense tracker at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            std::fs::create_dir_all(paths.remote_dir())?;
            if settings.remote_store.is_none() {
                settings.remote_store = Some(paths.default_remote_file());
            }
            settings.save(&paths)?;
            println!("Initialization complete!");
            if let Some(remote) = &settings.remote_store {
                println!("Remote store: {}", remote.display());
            }
            return Ok(());
        }
        Some(command) => command,
        None => {
            println!("Expense Tracker - personal expense tracking");
            println!();
            println!("Run 'expenses --help' for usage information.");
            return Ok(());
        }
    };

    // Initialize storage and load the collection
    let repository = open_repository(&paths, &settings)?;
    let mut service = ExpenseService::new(repository);
    if let Some(notification) = service.load() {
        print_notification(&notification);
    }

    let result = match command {
        Commands::Add(args) => handle_add(&mut service, &settings, args),
        Commands::List(args) => handle_list(&service, &settings, args),
        Commands::Delete { id } => handle_delete(&mut service, &id),
        Commands::Report(args) => {
            handle_report(&service, &settings, args);
            Ok(())
        }
        Commands::Chart => {
            handle_chart(&service, &settings);
            Ok(())
        }
        Commands::Export { output } => handle_export(&service, output),
        Commands::Import { path } => handle_import(&mut service, &path),
        Commands::Categories | Commands::Config | Commands::Init => Ok(()),
    };

    service.close()?;
    result?;
    Ok(())
}

fn print_config(paths: &ExpensePaths, settings: &Settings) {
    println!("Expense Tracker Configuration");
    println!("=============================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Local cache:      {}", paths.cache_file(EXPENSES_KEY).display());
    match &settings.remote_store {
        Some(remote) => println!("Remote store:     {}", remote.display()),
        None => println!("Remote store:     (none, working offline)"),
    }
    println!();
    println!("Settings:");
    println!("  Currency symbol:     {}", settings.currency_symbol);
    println!("  Thousands separator: {}", settings.thousands_separator);
    println!("  Date format:         {}", settings.display_date_format);
    println!("  Top categories:      {}", settings.top_categories);
}

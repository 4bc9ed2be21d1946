use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{
    handle_budget_command, handle_expense_command, handle_export_command, handle_history_command,
    handle_report_command, BudgetCommands, ExpenseCommands, ExportFormat,
};
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Track a budget and itemized expenses from the terminal",
    long_about = "Set a budget, record expenses tagged as daily, weekly, monthly or \
                  one-time, and keep an eye on what is left. Everything is stored \
                  in a single JSON file."
)]
struct Cli {
    /// Ledger file to use instead of the one in the data directory
    #[arg(long, global = true, env = "EXPENSE_TRACKER_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Expense commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Show totals by frequency and each expense's share
    Report,

    /// Export expenses to a file
    Export {
        /// Output file (defaults to expenses.csv / .json / .yaml)
        output: Option<PathBuf>,

        /// Export format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,
    },

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut paths = ExpensePaths::new()?;
    if let Some(file) = cli.file {
        paths = paths.with_ledger_file(file);
    }
    let settings = Settings::load_or_create(&paths)?;

    init_tracing(&settings);

    if !paths.settings_file().exists() {
        settings.save(&paths)?;
        tracing::debug!(path = %paths.settings_file().display(), "wrote default settings");
    }

    let mut storage = Storage::new(paths)?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Budget(cmd)) => handle_budget_command(&storage, &settings, cmd)?,
        Some(Commands::Expense(cmd)) => handle_expense_command(&storage, &settings, cmd)?,
        Some(Commands::Report) => handle_report_command(&storage, &settings)?,
        Some(Commands::Export { output, format }) => {
            handle_export_command(&storage, output, format)?
        }
        Some(Commands::History { count }) => handle_history_command(&storage, count)?,
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Config directory: {}", storage.paths().base_dir().display());
            println!("Ledger file:      {}", storage.paths().ledger_file().display());
            println!("Settings file:    {}", storage.paths().settings_file().display());
            println!("Audit log:        {}", storage.paths().audit_log().display());
            println!();
            println!("Settings:");
            println!("  Deduct from budget: {}", settings.deduction_policy);
            println!("  Default frequency:  {}", settings.default_frequency);
            println!("  Currency symbol:    {}", settings.currency_symbol);
            println!("  Log level:          {}", settings.log_level);
        }
        None => {
            println!("Expense Tracker - budget and expenses from the terminal");
            println!();
            println!("Run 'expenses --help' for usage information.");
            println!("Run 'expenses budget set 1000' to get started.");
        }
    }

    Ok(())
}

/// Log to stderr, filtered by RUST_LOG or the configured level
fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("expense_tracker={}", settings.log_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

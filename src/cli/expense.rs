//! Expense CLI commands
//!
//! Implements CLI commands for adding and listing expenses.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_expense_list, format_remaining_budget};
use crate::error::ExpenseResult;
use crate::models::Frequency;
use crate::services::LedgerService;
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// What the money was spent on
        name: String,
        /// Amount (must be positive)
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Frequency: daily, weekly, monthly or one-time (defaults to the configured frequency)
        #[arg(short, long)]
        frequency: Option<Frequency>,
    },

    /// List all expenses
    #[command(alias = "ls")]
    List,
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let service = LedgerService::new(storage, settings);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            name,
            amount,
            frequency,
        } => {
            let frequency = frequency.unwrap_or(settings.default_frequency);
            let added = service.add_expense(&name, &amount, frequency)?;

            println!(
                "Added expense: {} {} ({})",
                added.expense.name,
                added.expense.amount.format_with_symbol(symbol),
                added.expense.frequency
            );
            if added.deducted {
                println!("Deducted from budget.");
            }
            println!("{}", format_remaining_budget(added.budget, symbol));
        }
        ExpenseCommands::List => {
            let state = service.state()?;
            print!("{}", format_expense_list(&state.expenses, state.budget, symbol));
        }
    }

    Ok(())
}

//! Budget CLI commands
//!
//! Implements CLI commands for viewing, setting and resetting the budget.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_remaining_budget;
use crate::error::ExpenseResult;
use crate::services::LedgerService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Show the remaining budget
    Show,

    /// Replace the budget without recording an adjustment
    Set {
        /// New budget (e.g. "1500" or "1500.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Replace the budget and record the change as an adjustment
    Reset {
        /// New budget (e.g. "1500" or "1500.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> ExpenseResult<()> {
    let service = LedgerService::new(storage, settings);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Show => {
            println!("{}", format_remaining_budget(service.budget()?, symbol));
        }
        BudgetCommands::Set { amount } => {
            let budget = service.set_budget(&amount)?;
            println!("Budget set.");
            println!("{}", format_remaining_budget(budget, symbol));
        }
        BudgetCommands::Reset { amount } => {
            let adjustment = service.reset_budget(&amount)?;
            let sign = if adjustment.amount.is_negative() { "" } else { "+" };
            println!(
                "Budget reset ({}{}).",
                sign,
                adjustment.amount.format_with_symbol(symbol)
            );
            println!("{}", format_remaining_budget(service.budget()?, symbol));
        }
    }

    Ok(())
}

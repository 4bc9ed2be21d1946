//! Report and history CLI commands

use crate::config::settings::Settings;
use crate::error::ExpenseResult;
use crate::reports::ExpenseBreakdown;
use crate::storage::Storage;

/// Print the expense breakdown
pub fn handle_report_command(storage: &Storage, settings: &Settings) -> ExpenseResult<()> {
    let state = storage.ledger.snapshot()?;
    let report = ExpenseBreakdown::generate(&state.expenses);

    print!("{}", report.format_terminal(&settings.currency_symbol));
    Ok(())
}

/// Print the most recent audit log entries
pub fn handle_history_command(storage: &Storage, count: usize) -> ExpenseResult<()> {
    let entries = storage.audit().read_recent(count)?;

    if entries.is_empty() {
        println!("No changes recorded yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}

//! YAML Export functionality
//!
//! Writes the ledger in YAML for human reading.

use std::io::Write;

use chrono::Utc;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::LedgerState;

/// Export the ledger as YAML with a short header comment
pub fn export_ledger_yaml<W: Write>(state: &LedgerState, writer: &mut W) -> ExpenseResult<()> {
    writeln!(writer, "# Expense tracker ledger export")
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"))
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer, "# Expenses: {}", state.expenses.len())
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, state).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, Expense, Frequency};

    #[test]
    fn test_export_yaml() {
        let mut state = LedgerState::with_budget(Amount::new(90.0));
        state.record_expense(
            Expense::new("Museum", Amount::new(15.0), Frequency::OneTime),
            true,
        );

        let mut output = Vec::new();
        export_ledger_yaml(&state, &mut output).unwrap();

        let yaml = String::from_utf8(output).unwrap();
        assert!(yaml.starts_with("# Expense tracker ledger export"));
        assert!(yaml.contains("name: Museum"));
        assert!(yaml.contains("One Time"));

        let back: LedgerState = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, state);
    }
}

//! JSON Export functionality
//!
//! Writes the ledger document (`budget` + `expenses`) to another file. The
//! output has the same shape as the ledger file and can be loaded back.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::LedgerState;

/// Export the ledger as JSON
pub fn export_ledger_json<W: Write>(
    state: &LedgerState,
    writer: &mut W,
    pretty: bool,
) -> ExpenseResult<()> {
    let result = if pretty {
        serde_json::to_writer_pretty(&mut *writer, state)
    } else {
        serde_json::to_writer(&mut *writer, state)
    };
    result.map_err(|e| ExpenseError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;
    Ok(())
}

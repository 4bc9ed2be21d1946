//! CSV Export functionality
//!
//! Writes the expense list as `Name,Amount,Frequency` rows.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Header row of the CSV export
pub const CSV_HEADER: [&str; 3] = ["Name", "Amount", "Frequency"];

/// Export expenses to CSV in insertion order
///
/// Returns the number of expense rows written.
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(CSV_HEADER)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    for expense in expenses {
        let amount = expense.amount.value().to_string();
        let frequency = expense.frequency.to_string();
        csv_writer
            .write_record([expense.name.as_str(), amount.as_str(), frequency.as_str()])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(expenses.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, Frequency};

    #[test]
    fn test_export_expenses_csv() {
        let expenses = vec![
            Expense::new("Rent", Amount::new(950.0), Frequency::Monthly),
            Expense::new("Shoes", Amount::new(79.99), Frequency::OneTime),
            Expense::adjustment(Amount::new(-25.5)),
        ];

        let mut output = Vec::new();
        let count = export_expenses_csv(&expenses, &mut output).unwrap();
        assert_eq!(count, 3);

        let csv_string = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = csv_string.lines().collect();
        assert_eq!(lines[0], "Name,Amount,Frequency");
        assert_eq!(lines[1], "Rent,950,Monthly");
        assert_eq!(lines[2], "Shoes,79.99,One Time");
        assert_eq!(lines[3], "Budget Adjustment,-25.5,Adjustment");
    }

    #[test]
    fn test_export_quotes_commas() {
        let expenses = vec![Expense::new(
            "Coffee, large",
            Amount::new(4.5),
            Frequency::Daily,
        )];

        let mut output = Vec::new();
        export_expenses_csv(&expenses, &mut output).unwrap();

        let csv_string = String::from_utf8(output).unwrap();
        assert!(csv_string.contains("\"Coffee, large\",4.5,Daily"));
    }

    #[test]
    fn test_export_empty_has_header_only() {
        let mut output = Vec::new();
        export_expenses_csv(&[], &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "Name,Amount,Frequency\n");
    }
}

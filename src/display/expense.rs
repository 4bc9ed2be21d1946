//! Expense display formatting
//!
//! Formats the expense list and remaining budget for terminal output.

use crate::models::{total_spent, Amount, Expense};

/// Format the remaining budget line
pub fn format_remaining_budget(budget: Amount, currency_symbol: &str) -> String {
    format!("Remaining Budget: {}", budget.format_with_symbol(currency_symbol))
}

/// Format the expense list as a table
///
/// Adjustment rows are marked with `*`.
pub fn format_expense_list(expenses: &[Expense], budget: Amount, currency_symbol: &str) -> String {
    if expenses.is_empty() {
        return format!(
            "No expenses recorded.\n{}\n",
            format_remaining_budget(budget, currency_symbol)
        );
    }

    let name_width = expenses
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let amounts: Vec<String> = expenses
        .iter()
        .map(|e| e.amount.format_with_symbol(currency_symbol))
        .collect();
    let amount_width = amounts.iter().map(|a| a.chars().count()).max().unwrap_or(6).max(6);

    let mut output = String::new();
    output.push_str(&format!(
        "  {:<name_width$}  {:>amount_width$}  {}\n",
        "Name",
        "Amount",
        "Frequency",
        name_width = name_width,
        amount_width = amount_width,
    ));
    output.push_str(&format!(
        "  {:-<name_width$}  {:->amount_width$}  {:-<10}\n",
        "",
        "",
        "",
        name_width = name_width,
        amount_width = amount_width,
    ));

    let mut has_adjustments = false;
    for (expense, amount) in expenses.iter().zip(&amounts) {
        let marker = if expense.is_adjustment() {
            has_adjustments = true;
            '*'
        } else {
            ' '
        };

        output.push_str(&format!(
            "{} {:<name_width$}  {:>amount_width$}  {}\n",
            marker,
            expense.name,
            amount,
            expense.frequency,
            name_width = name_width,
            amount_width = amount_width,
        ));
    }

    let total = total_spent(expenses);

    output.push_str(&format!(
        "  {:-<name_width$}  {:->amount_width$}\n",
        "",
        "",
        name_width = name_width,
        amount_width = amount_width,
    ));
    output.push_str(&format!(
        "  {:<name_width$}  {:>amount_width$}\n",
        "TOTAL",
        total.format_with_symbol(currency_symbol),
        name_width = name_width,
        amount_width = amount_width,
    ));

    if has_adjustments {
        output.push_str("\n* budget adjustment (not counted in total)\n");
    }

    output.push('\n');
    output.push_str(&format_remaining_budget(budget, currency_symbol));
    output.push('\n');

    output
}

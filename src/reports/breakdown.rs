//! Expense Breakdown Report
//!
//! Totals per frequency, and each non-negative expense's share of the total
//! (the slices of a pie chart).

use crate::models::{total_spent, Amount, Expense, Frequency};

/// Totals for one frequency
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTotal {
    pub frequency: Frequency,
    pub total: Amount,
    pub count: usize,
}

/// One expense and its share of all non-negative expenses
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseShare {
    pub name: String,
    pub amount: Amount,
    /// Percentage of the slice total (0-100)
    pub percentage: f64,
}

/// Expense breakdown report
#[derive(Debug, Clone)]
pub struct ExpenseBreakdown {
    /// Totals for frequencies that have at least one expense, in display order
    pub by_frequency: Vec<FrequencyTotal>,
    /// Non-negative expenses in insertion order
    pub shares: Vec<ExpenseShare>,
    /// Sum of the amounts in `shares`
    pub share_total: Amount,
    /// Sum of all non-adjustment expenses
    pub total_spent: Amount,
    /// Net of all adjustment records
    pub net_adjustments: Amount,
}

impl ExpenseBreakdown {
    /// Generate a breakdown of the given expenses
    pub fn generate(expenses: &[Expense]) -> Self {
        let by_frequency = Frequency::ALL
            .iter()
            .filter_map(|&frequency| {
                let matching: Vec<&Expense> = expenses
                    .iter()
                    .filter(|e| e.frequency == frequency)
                    .collect();

                if matching.is_empty() {
                    None
                } else {
                    Some(FrequencyTotal {
                        frequency,
                        total: matching.iter().map(|e| e.amount).sum(),
                        count: matching.len(),
                    })
                }
            })
            .collect();

        let slices: Vec<&Expense> = expenses.iter().filter(|e| !e.amount.is_negative()).collect();
        let share_total: Amount = slices.iter().map(|e| e.amount).sum();

        let shares = slices
            .iter()
            .map(|e| ExpenseShare {
                name: e.name.clone(),
                amount: e.amount,
                percentage: if share_total.is_zero() {
                    0.0
                } else {
                    e.amount.value() / share_total.value() * 100.0
                },
            })
            .collect();

        let total_spent = total_spent(expenses);

        let net_adjustments = expenses
            .iter()
            .filter(|e| e.is_adjustment())
            .map(|e| e.amount)
            .sum();

        Self {
            by_frequency,
            shares,
            share_total,
            total_spent,
            net_adjustments,
        }
    }

    /// Check if there is anything to chart
    pub fn has_shares(&self) -> bool {
        !self.shares.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Expense Breakdown\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "Total Spent:      {}\n",
            self.total_spent.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "Net Adjustments:  {}\n\n",
            self.net_adjustments.format_with_symbol(currency_symbol)
        ));

        output.push_str(&format!("{:<20} {:>14} {:>8}\n", "Frequency", "Total", "Count"));
        output.push_str(&"-".repeat(60));
        output.push('\n');
        for row in &self.by_frequency {
            output.push_str(&format!(
                "{:<20} {:>14} {:>8}\n",
                row.frequency.to_string(),
                row.total.format_with_symbol(currency_symbol),
                row.count
            ));
        }
        output.push('\n');

        if !self.has_shares() {
            output.push_str("No non-negative expense data to display.\n");
            return output;
        }

        let name_width = self
            .shares
            .iter()
            .map(|s| s.name.chars().count())
            .max()
            .unwrap_or(4)
            .max(4);

        output.push_str(&format!(
            "{:<name_width$}  {:>14} {:>7}  Share\n",
            "Name",
            "Amount",
            "%",
            name_width = name_width
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for share in &self.shares {
            // One block per 5%
            let bar = "#".repeat((share.percentage / 5.0).round() as usize);
            output.push_str(&format!(
                "{:<name_width$}  {:>14} {:>6.1}%  {}\n",
                share.name,
                share.amount.format_with_symbol(currency_symbol),
                share.percentage,
                bar,
                name_width = name_width
            ));
        }

        output
    }
}

//! Ledger state model
//!
//! The whole persisted state: the remaining budget and the ordered list of
//! expenses. This is exactly the document stored in the ledger file.

use serde::{Deserialize, Deserializer, Serialize};

use super::amount::Amount;
use super::expense::Expense;

/// Budget plus expense list, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerState {
    /// Remaining funds
    #[serde(default)]
    pub budget: Amount,

    /// Expenses in the order they were entered
    #[serde(default, deserialize_with = "deserialize_expenses")]
    pub expenses: Vec<Expense>,
}

impl LedgerState {
    /// Create a state with a starting budget and no expenses
    pub fn with_budget(budget: Amount) -> Self {
        Self {
            budget,
            expenses: Vec::new(),
        }
    }

    /// Append an expense, deducting it from the budget when `deduct` is set
    pub fn record_expense(&mut self, expense: Expense, deduct: bool) {
        if deduct {
            self.budget -= expense.amount;
        }
        self.expenses.push(expense);
    }

    /// Replace the budget and append an adjustment record for the change
    ///
    /// Returns the appended adjustment.
    pub fn reset_budget(&mut self, new_budget: Amount) -> &Expense {
        let delta = new_budget - self.budget;
        self.budget = new_budget;
        self.expenses.push(Expense::adjustment(delta));
        &self.expenses[self.expenses.len() - 1]
    }
}

/// Deserialize the expense list one record at a time
///
/// A record that doesn't parse is skipped with a warning; the rest of the
/// ledger still loads.
fn deserialize_expenses<'de, D>(deserializer: D) -> Result<Vec<Expense>, D::Error>
where
    D: Deserializer<'de>,
{
    let records = Vec::<serde_json::Value>::deserialize(deserializer)?;

    Ok(records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(expense) => Some(expense),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping unreadable expense record");
                None
            }
        })
        .collect())
}

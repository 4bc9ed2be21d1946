//! Expense model
//!
//! An expense is a named amount tagged with how often it recurs. Budget
//! resets are recorded as synthetic `Adjustment` expenses carrying the delta.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::amount::Amount;
use crate::error::ExpenseError;

/// Name given to the synthetic record appended by a budget reset
pub const ADJUSTMENT_NAME: &str = "Budget Adjustment";

/// How often an expense occurs
///
/// The serialized names match what is stored in the ledger file, so
/// `OneTime` is written as `"One Time"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Frequency {
    Daily,
    Weekly,
    #[default]
    Monthly,
    #[serde(rename = "One Time")]
    OneTime,
    /// Budget reset delta; never entered by the user
    Adjustment,
}

impl Frequency {
    /// All frequencies in display order
    pub const ALL: [Frequency; 5] = [
        Frequency::Daily,
        Frequency::Weekly,
        Frequency::Monthly,
        Frequency::OneTime,
        Frequency::Adjustment,
    ];

    /// Check if this frequency repeats
    pub fn is_recurring(&self) -> bool {
        matches!(self, Self::Daily | Self::Weekly | Self::Monthly)
    }

    /// Check if a user may enter an expense with this frequency
    pub fn is_user_selectable(&self) -> bool {
        !matches!(self, Self::Adjustment)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "Daily"),
            Self::Weekly => write!(f, "Weekly"),
            Self::Monthly => write!(f, "Monthly"),
            Self::OneTime => write!(f, "One Time"),
            Self::Adjustment => write!(f, "Adjustment"),
        }
    }
}

impl FromStr for Frequency {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "daily" | "day" => Ok(Self::Daily),
            "weekly" | "week" => Ok(Self::Weekly),
            "monthly" | "month" => Ok(Self::Monthly),
            "onetime" | "once" => Ok(Self::OneTime),
            "adjustment" | "adj" => Ok(Self::Adjustment),
            _ => Err(ExpenseError::Validation(format!(
                "Unknown frequency '{}' (expected daily, weekly, monthly or one-time)",
                s.trim()
            ))),
        }
    }
}

/// A single expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// What the money was spent on
    pub name: String,

    /// Amount spent (adjustments carry a signed delta)
    pub amount: Amount,

    /// How often this expense occurs
    #[serde(default)]
    pub frequency: Frequency,
}

impl Expense {
    /// Create a new expense
    pub fn new(name: impl Into<String>, amount: Amount, frequency: Frequency) -> Self {
        Self {
            name: name.into(),
            amount,
            frequency,
        }
    }

    /// Create the synthetic record for a budget reset
    pub fn adjustment(delta: Amount) -> Self {
        Self::new(ADJUSTMENT_NAME, delta, Frequency::Adjustment)
    }

    /// Check if this record was produced by a budget reset
    pub fn is_adjustment(&self) -> bool {
        self.frequency == Frequency::Adjustment
    }

    /// Validate a user-entered expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.name.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }

        if !self.frequency.is_user_selectable() {
            return Err(ExpenseValidationError::ReservedFrequency(self.frequency));
        }

        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        Ok(())
    }
}

/// Sum of all expenses that aren't budget adjustments
pub fn total_spent(expenses: &[Expense]) -> Amount {
    expenses
        .iter()
        .filter(|e| !e.is_adjustment())
        .map(|e| e.amount)
        .sum()
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.name, self.amount, self.frequency)
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseValidationError {
    EmptyName,
    NonPositiveAmount(Amount),
    ReservedFrequency(Frequency),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Please enter an expense name"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be positive, got {}", amount)
            }
            Self::ReservedFrequency(freq) => {
                write!(f, "Frequency '{}' is reserved for budget resets", freq)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

impl From<ExpenseValidationError> for ExpenseError {
    fn from(err: ExpenseValidationError) -> Self {
        match err {
            ExpenseValidationError::NonPositiveAmount(amount) => {
                ExpenseError::InvalidAmount(format!("{} (must be positive)", amount.value()))
            }
            other => ExpenseError::Validation(other.to_string()),
        }
    }
}

//! Core data models for the expense tracker
//!
//! This module contains the data structures that make up the ledger:
//! amounts, expenses and their frequencies, and the persisted state.

pub mod amount;
pub mod expense;
pub mod ledger;

pub use amount::{Amount, AmountParseError};
pub use expense::{total_spent, Expense, ExpenseValidationError, Frequency, ADJUSTMENT_NAME};
pub use ledger::LedgerState;

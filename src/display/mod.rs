//! Display formatting for terminal output
//!
//! Provides utilities for formatting the ledger for terminal display.

pub mod expense;

pub use expense::{format_expense_list, format_remaining_budget};

//! Reports module for the expense tracker
//!
//! Summaries computed from the expense list.

pub mod breakdown;

pub use breakdown::{ExpenseBreakdown, ExpenseShare, FrequencyTotal};

//! Expense tracker - a running budget with itemized expenses
//!
//! This library provides the core of the `expenses` command-line tool. The
//! user sets a budget, records expenses tagged with a frequency, and the
//! remaining budget is kept as a running total. State lives in a single JSON
//! file.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Amounts, expenses and the ledger state
//! - `storage`: JSON file storage layer
//! - `services`: Budget and expense operations
//! - `audit`: Audit logging of every change
//! - `reports`: Expense breakdowns
//! - `export`: CSV, JSON and YAML export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{ExpensePaths, Settings};
//! use expense_tracker::services::LedgerService;
//! use expense_tracker::storage::Storage;
//! use expense_tracker::models::Frequency;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//!
//! let ledger = LedgerService::new(&storage, &settings);
//! ledger.set_budget("1200")?;
//! ledger.add_expense("Bike repair", "80", Frequency::OneTime)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};

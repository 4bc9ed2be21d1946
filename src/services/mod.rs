//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, budget arithmetic and audit logging.

pub mod ledger;

pub use ledger::{ExpenseAdded, LedgerService};

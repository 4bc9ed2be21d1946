//! Audit logging for the expense tracker
//!
//! Records every budget change and every appended expense, with before/after
//! values, in an append-only audit log.
//!
//! - `AuditEntry`: a single entry with timestamp, operation, entity information
//!   and optional before/after values.
//! - `AuditLogger`: writes entries to the log file as line-delimited JSON.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! let entry = AuditEntry::create(EntityType::Expense, "expense-0", Some("Rent".into()), &expense);
//! logger.log_batch(&[entry])?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;

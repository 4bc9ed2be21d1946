//! Ledger service
//!
//! Business logic for the budget and expense list: parsing user-entered
//! amounts, appending expenses, deducting them according to the configured
//! policy, and recording budget resets as adjustments. Every successful
//! change is saved and written to the audit log.

use crate::audit::{AuditEntry, EntityType};
use crate::config::settings::{DeductionPolicy, Settings};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Amount, Expense, Frequency, LedgerState};
use crate::storage::Storage;

/// Service for budget and expense management
pub struct LedgerService<'a> {
    storage: &'a Storage,
    policy: DeductionPolicy,
}

/// Result of adding an expense
#[derive(Debug, Clone)]
pub struct ExpenseAdded {
    pub expense: Expense,
    /// Whether the amount was subtracted from the budget
    pub deducted: bool,
    /// Budget after the change
    pub budget: Amount,
}

impl<'a> LedgerService<'a> {
    /// Create a ledger service using the deduction policy from settings
    pub fn new(storage: &'a Storage, settings: &Settings) -> Self {
        Self::with_policy(storage, settings.deduction_policy)
    }

    /// Create a ledger service with an explicit deduction policy
    pub fn with_policy(storage: &'a Storage, policy: DeductionPolicy) -> Self {
        Self { storage, policy }
    }

    /// Current remaining budget
    pub fn budget(&self) -> ExpenseResult<Amount> {
        Ok(self.storage.ledger.snapshot()?.budget)
    }

    /// All expenses in insertion order
    pub fn expenses(&self) -> ExpenseResult<Vec<Expense>> {
        Ok(self.storage.ledger.snapshot()?.expenses)
    }

    /// Full copy of the ledger state
    pub fn state(&self) -> ExpenseResult<LedgerState> {
        self.storage.ledger.snapshot()
    }

    /// Replace the budget with a user-entered value
    ///
    /// Fails with `InvalidAmount` on non-numeric input; state is unchanged.
    pub fn set_budget(&self, input: &str) -> ExpenseResult<Amount> {
        let new_budget = Amount::parse(input)?;

        let old_budget = self.storage.ledger.update(|state| {
            let old = state.budget;
            state.budget = new_budget;
            old
        })?;
        self.storage.ledger.save()?;

        self.record_audit(&[AuditEntry::update(
            EntityType::Budget,
            "budget",
            None,
            &old_budget,
            &new_budget,
            Some(format!("budget: {} -> {}", old_budget, new_budget)),
        )]);

        tracing::info!(old = old_budget.value(), new = new_budget.value(), "budget set");
        Ok(new_budget)
    }

    /// Append an expense
    ///
    /// Fails if the name is blank, the amount is not a positive number, or
    /// the frequency is reserved for adjustments. State is unchanged on
    /// failure. The budget is decremented when the policy covers `frequency`.
    pub fn add_expense(
        &self,
        name: &str,
        amount: &str,
        frequency: Frequency,
    ) -> ExpenseResult<ExpenseAdded> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ExpenseError::Validation(
                "Please enter an expense name".into(),
            ));
        }

        let amount = Amount::parse(amount)?;
        let expense = Expense::new(name, amount, frequency);
        expense.validate()?;

        let deducted = self.policy.deducts(frequency);

        let (index, old_budget, new_budget) = self.storage.ledger.update(|state| {
            let old = state.budget;
            state.record_expense(expense.clone(), deducted);
            (state.expenses.len() - 1, old, state.budget)
        })?;
        self.storage.ledger.save()?;

        let mut entries = vec![AuditEntry::create(
            EntityType::Expense,
            format!("expense-{}", index),
            Some(expense.name.clone()),
            &expense,
        )];
        if deducted {
            entries.push(AuditEntry::update(
                EntityType::Budget,
                "budget",
                None,
                &old_budget,
                &new_budget,
                Some(format!("budget: {} -> {}", old_budget, new_budget)),
            ));
        }
        self.record_audit(&entries);

        tracing::info!(
            name = %expense.name,
            amount = expense.amount.value(),
            frequency = %expense.frequency,
            deducted,
            "expense added"
        );

        Ok(ExpenseAdded {
            expense,
            deducted,
            budget: new_budget,
        })
    }

    /// Replace the budget and record the change as an adjustment expense
    ///
    /// Exactly one `Adjustment` record equal to `new - old` is appended.
    pub fn reset_budget(&self, input: &str) -> ExpenseResult<Expense> {
        let new_budget = Amount::parse(input)?;

        let (index, old_budget, adjustment) = self.storage.ledger.update(|state| {
            let old = state.budget;
            let adjustment = state.reset_budget(new_budget).clone();
            (state.expenses.len() - 1, old, adjustment)
        })?;
        self.storage.ledger.save()?;

        self.record_audit(&[
            AuditEntry::update(
                EntityType::Budget,
                "budget",
                None,
                &old_budget,
                &new_budget,
                Some(format!("budget: {} -> {}", old_budget, new_budget)),
            ),
            AuditEntry::create(
                EntityType::Expense,
                format!("expense-{}", index),
                Some(adjustment.name.clone()),
                &adjustment,
            ),
        ]);

        tracing::info!(
            old = old_budget.value(),
            new = new_budget.value(),
            delta = adjustment.amount.value(),
            "budget reset"
        );
        Ok(adjustment)
    }

    /// Append entries to the audit log
    ///
    /// The ledger has already been saved at this point, so a failed write is
    /// logged and the operation still succeeds.
    fn record_audit(&self, entries: &[AuditEntry]) {
        if let Err(e) = self.storage.log_batch(entries) {
            tracing::warn!(error = %e, entries = entries.len(), "failed to write audit log");
        }
    }
}

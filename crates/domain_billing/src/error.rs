//! Billing domain errors

use core_kernel::PortError;
use thiserror::Error;

/// Errors that can occur in the billing domain
#[derive(Debug, Error)]
pub enum BillingError {
    /// Generation requested for an unknown transaction
    #[error("Transaction not found: {0}")]
    TransactionNotFound(String),

    /// Generation requested for a transaction that already has a bill
    #[error("Transaction {id} already billed as {bill_number}")]
    AlreadyBilled {
        id: String,
        bill_number: String,
    },

    /// The export document could not be produced
    #[error("Export failed: {0}")]
    Export(String),

    /// Underlying store failure
    #[error(transparent)]
    Store(#[from] PortError),
}

impl BillingError {
    /// Creates a TransactionNotFound error from any ID type
    pub fn not_found(id: impl std::fmt::Display) -> Self {
        BillingError::TransactionNotFound(id.to_string())
    }

    /// Returns true if this is the not-found rejection
    pub fn is_not_found(&self) -> bool {
        matches!(self, BillingError::TransactionNotFound(_))
            || matches!(self, BillingError::Store(e) if e.is_not_found())
    }

    /// Returns true if this is the duplicate-generation rejection
    pub fn is_already_billed(&self) -> bool {
        matches!(self, BillingError::AlreadyBilled { .. })
            || matches!(self, BillingError::Store(e) if e.is_conflict())
    }
}

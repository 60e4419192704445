//! Ledger domain errors

use thiserror::Error;

/// Errors that can occur in the ledger domain
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Transaction with the given ID was not found
    #[error("Transaction not found: {0}")]
    TransactionNotFound(String),

    /// Transaction already carries a bill reference
    #[error("Transaction {id} already billed as {bill_number}")]
    AlreadyBilled {
        id: String,
        bill_number: String,
    },

    /// Invalid transaction data provided
    #[error("Invalid transaction data: {0}")]
    InvalidData(String),
}

impl LedgerError {
    /// Creates a TransactionNotFound error from any ID type
    pub fn not_found(id: impl std::fmt::Display) -> Self {
        LedgerError::TransactionNotFound(id.to_string())
    }

    /// Creates an InvalidData error with a message
    pub fn invalid(message: impl Into<String>) -> Self {
        LedgerError::InvalidData(message.into())
    }
}

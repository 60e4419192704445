//! KYC domain errors

use core_kernel::PortError;
use thiserror::Error;

/// Errors that can occur in the KYC domain
#[derive(Debug, Error)]
pub enum KycError {
    /// Save rejected because every identity field was empty
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// Underlying store failure
    #[error(transparent)]
    Store(#[from] PortError),
}

impl KycError {
    /// Creates a ValidationFailed error from validation messages
    pub fn validation_failed(errors: Vec<String>) -> Self {
        KycError::ValidationFailed(errors.join("; "))
    }

    /// Returns true if this is a validation rejection
    pub fn is_validation(&self) -> bool {
        matches!(self, KycError::ValidationFailed(_))
            || matches!(self, KycError::Store(e) if e.is_validation())
    }
}

//! Billing request/response DTOs

use serde::{Deserialize, Serialize};

use core_kernel::TransactionId;

use crate::error::ApiError;

/// Body for generating a bill
#[derive(Debug, Deserialize)]
pub struct GenerateBillBody {
    #[serde(rename = "transactionId")]
    pub transaction_id: TransactionId,
    pub notes: Option<String>,
}

/// Query parameters selecting one calendar month
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MonthParams {
    pub year: i32,
    pub month: u32,
}

impl MonthParams {
    /// Rejects out-of-range months before they reach the domain
    pub fn validate(self) -> Result<Self, ApiError> {
        if !(1..=12).contains(&self.month) {
            return Err(ApiError::BadRequest(format!(
                "month out of range: {}",
                self.month
            )));
        }
        Ok(self)
    }
}

/// Response for a cleanup call
#[derive(Debug, Serialize)]
pub struct CleanupResponse {
    pub removed: usize,
}

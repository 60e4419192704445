//! KYC (Know Your Customer) records
//!
//! A record captures the identity evidence collected for one customer and
//! the credit transactions that evidence covers. Records are append-only:
//! a fresh save for the same customer produces a new record rather than
//! editing history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{KycId, TransactionId};

/// Identity evidence for one customer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KycRecord {
    pub id: KycId,
    /// Customer display name
    pub name: String,
    /// Permanent Account Number; may be empty when other evidence exists
    pub pan: String,
    /// Last four digits of the Aadhaar number; may be empty
    #[serde(rename = "aadhaarLast4")]
    pub aadhaar_last4: String,
    /// GST registration, when the customer has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gst: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Date of the save, date-only granularity
    #[serde(rename = "updatedAt")]
    pub updated_at: NaiveDate,
    /// Credit transactions this record verifies, in the order submitted
    #[serde(rename = "linkedTransactions")]
    pub linked_transactions: Vec<TransactionId>,
}

impl KycRecord {
    /// Returns true if the record carries at least one identity field
    pub fn has_identity_field(&self) -> bool {
        !self.pan.trim().is_empty()
            || !self.aadhaar_last4.trim().is_empty()
            || self.gst.as_deref().is_some_and(|g| !g.trim().is_empty())
    }

    /// Returns true if the record links the given transaction
    pub fn links(&self, id: TransactionId) -> bool {
        self.linked_transactions.contains(&id)
    }
}

/// Input for saving a KYC record
///
/// The id and save date are generated server-side; everything else comes
/// from the verification form.
#[derive(Debug, Clone, Default)]
pub struct SaveKycRequest {
    pub name: String,
    pub pan: String,
    pub aadhaar_last4: String,
    pub gst: Option<String>,
    pub notes: Option<String>,
    pub linked_transactions: Vec<TransactionId>,
}

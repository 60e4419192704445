//! TDS Domain
//!
//! Tracks cumulative payments to each vendor against the withholding-tax
//! (TDS) thresholds. The whole domain is one derivation: group the ledger's
//! debits by vendor, sum, and band. Nothing here persists; the summary is
//! recomputed from the transaction list on every request.

pub mod aggregate;

pub use aggregate::{
    aggregate, TdsStatus, VendorSummary,
    TDS_NEARING_THRESHOLD_RUPEES, TDS_REQUIRED_THRESHOLD_RUPEES,
};

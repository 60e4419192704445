//! Billing Domain
//!
//! Sequential bill generation over the transaction ledger. A bill snapshots
//! exactly one credit transaction under a `<year>-<sequence>` number drawn
//! from a single counter shared across all years. Numbers within a year are
//! therefore not contiguous when years interleave; that numbering is
//! inherited behavior, not an accident.
//!
//! The crate also owns the monthly auditor export (CSV) and the matching
//! cleanup operation, plus the settings that seed the sequence.

pub mod bill;
pub mod service;
pub mod export;
pub mod ports;
pub mod error;

pub use bill::Bill;
pub use service::BillingService;
pub use ports::{
    BillPort, SettingsPort, BillingSettings, MemoryBillStore, MemorySettingsStore,
};
pub use error::BillingError;

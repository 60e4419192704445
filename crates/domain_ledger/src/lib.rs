//! Ledger Domain
//!
//! This crate owns the bank-transaction entity and everything derived
//! directly from the transaction list: query filtering for the dashboard's
//! list view and the monthly credit/debit rollup for charting.
//!
//! Transactions are append-mostly. After ingest, only two fields ever
//! change: the KYC status (forward-only, `PENDING` to `COMPLETED`) and the
//! bill reference (set exactly once). Both transitions go through dedicated
//! port operations rather than general-purpose updates, which is what lets
//! the invariants live in one place.

pub mod transaction;
pub mod rollup;
pub mod ports;
pub mod error;

pub use transaction::{Transaction, TransactionType, KycStatus, TransactionQuery};
pub use rollup::{MonthlyFlow, monthly_flows};
pub use ports::{TransactionPort, UpdateTransactionRequest, MemoryTransactionStore};
pub use error::LedgerError;

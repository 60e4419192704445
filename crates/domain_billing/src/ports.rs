//! Billing Domain Ports
//!
//! Port interfaces for the bill store and the billing settings, plus the
//! in-memory adapters behind them. The settings store owns the shared bill
//! sequence; issuance happens under its write lock so concurrent generation
//! cannot mint the same number twice.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use core_kernel::{
    BillNumber, DomainPort, HealthCheckResult, HealthCheckable, OperationMetadata, PortError,
};

use crate::bill::Bill;

/// Billing configuration held by the settings store
///
/// `last_serial` is the next sequence value a generated bill will use; the
/// original exposed it on the settings screen as the "starting sequence
/// number".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingSettings {
    #[serde(rename = "lastSerial")]
    pub last_serial: u32,
}

impl Default for BillingSettings {
    fn default() -> Self {
        Self { last_serial: 1 }
    }
}

/// The main port trait for bill store operations
#[async_trait]
pub trait BillPort: DomainPort + HealthCheckable {
    /// Lists all bills, oldest first
    async fn list(&self, metadata: Option<OperationMetadata>) -> Result<Vec<Bill>, PortError>;

    /// Appends a new bill
    async fn create(
        &self,
        bill: Bill,
        metadata: Option<OperationMetadata>,
    ) -> Result<Bill, PortError>;

    /// Lists the bills dated in one calendar month
    async fn list_month(
        &self,
        year: i32,
        month: u32,
        metadata: Option<OperationMetadata>,
    ) -> Result<Vec<Bill>, PortError>;

    /// Deletes the bills dated in one calendar month, returning the count
    async fn purge_month(
        &self,
        year: i32,
        month: u32,
        metadata: Option<OperationMetadata>,
    ) -> Result<usize, PortError>;
}

/// Port trait for billing settings and sequence issuance
#[async_trait]
pub trait SettingsPort: DomainPort + HealthCheckable {
    /// Reads the current settings
    async fn get(&self, metadata: Option<OperationMetadata>)
        -> Result<BillingSettings, PortError>;

    /// Overwrites the settings
    ///
    /// Writes are accepted verbatim; rewinding the sequence is the
    /// operator's responsibility.
    async fn save(
        &self,
        settings: BillingSettings,
        metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError>;

    /// Issues the next bill number for the given year
    ///
    /// Uses the current sequence value, then increments it, in one
    /// serialized step.
    async fn issue_bill_number(
        &self,
        year: i32,
        metadata: Option<OperationMetadata>,
    ) -> Result<BillNumber, PortError>;
}

/// In-memory implementations of the billing ports
pub mod memory {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// In-memory bill store
    #[derive(Debug, Default, Clone)]
    pub struct MemoryBillStore {
        bills: Arc<RwLock<Vec<Bill>>>,
    }

    impl MemoryBillStore {
        /// Creates an empty store
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a store pre-populated with bills, in order
        pub fn with_bills(bills: Vec<Bill>) -> Self {
            Self {
                bills: Arc::new(RwLock::new(bills)),
            }
        }
    }

    impl DomainPort for MemoryBillStore {}

    #[async_trait]
    impl HealthCheckable for MemoryBillStore {
        async fn health_check(&self) -> HealthCheckResult {
            let count = self.bills.read().await.len();
            HealthCheckResult {
                adapter_id: "memory-bill-store".to_string(),
                status: core_kernel::AdapterHealth::Healthy,
                message: Some(format!("{count} bills held")),
                checked_at: chrono::Utc::now(),
            }
        }
    }

    #[async_trait]
    impl BillPort for MemoryBillStore {
        async fn list(
            &self,
            _metadata: Option<OperationMetadata>,
        ) -> Result<Vec<Bill>, PortError> {
            Ok(self.bills.read().await.clone())
        }

        async fn create(
            &self,
            bill: Bill,
            _metadata: Option<OperationMetadata>,
        ) -> Result<Bill, PortError> {
            let mut bills = self.bills.write().await;
            if bills.iter().any(|b| b.bill_number == bill.bill_number) {
                return Err(PortError::conflict(format!(
                    "bill {} already exists",
                    bill.bill_number
                )));
            }
            bills.push(bill.clone());
            Ok(bill)
        }

        async fn list_month(
            &self,
            year: i32,
            month: u32,
            _metadata: Option<OperationMetadata>,
        ) -> Result<Vec<Bill>, PortError> {
            Ok(self
                .bills
                .read()
                .await
                .iter()
                .filter(|b| b.in_month(year, month))
                .cloned()
                .collect())
        }

        async fn purge_month(
            &self,
            year: i32,
            month: u32,
            _metadata: Option<OperationMetadata>,
        ) -> Result<usize, PortError> {
            let mut bills = self.bills.write().await;
            let before = bills.len();
            bills.retain(|b| !b.in_month(year, month));
            Ok(before - bills.len())
        }
    }

    /// In-memory settings store owning the bill sequence
    #[derive(Debug, Clone)]
    pub struct MemorySettingsStore {
        settings: Arc<RwLock<BillingSettings>>,
    }

    impl Default for MemorySettingsStore {
        fn default() -> Self {
            Self {
                settings: Arc::new(RwLock::new(BillingSettings::default())),
            }
        }
    }

    impl MemorySettingsStore {
        /// Creates a store with the default sequence start
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a store with the sequence at the given value
        pub fn with_serial(last_serial: u32) -> Self {
            Self {
                settings: Arc::new(RwLock::new(BillingSettings { last_serial })),
            }
        }
    }

    impl DomainPort for MemorySettingsStore {}

    #[async_trait]
    impl HealthCheckable for MemorySettingsStore {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult {
                adapter_id: "memory-settings-store".to_string(),
                status: core_kernel::AdapterHealth::Healthy,
                message: None,
                checked_at: chrono::Utc::now(),
            }
        }
    }

    #[async_trait]
    impl SettingsPort for MemorySettingsStore {
        async fn get(
            &self,
            _metadata: Option<OperationMetadata>,
        ) -> Result<BillingSettings, PortError> {
            Ok(*self.settings.read().await)
        }

        async fn save(
            &self,
            settings: BillingSettings,
            _metadata: Option<OperationMetadata>,
        ) -> Result<(), PortError> {
            *self.settings.write().await = settings;
            Ok(())
        }

        async fn issue_bill_number(
            &self,
            year: i32,
            _metadata: Option<OperationMetadata>,
        ) -> Result<BillNumber, PortError> {
            // Single write lock across read-and-increment keeps numbers unique
            let mut settings = self.settings.write().await;
            let number = BillNumber::new(year, settings.last_serial);
            settings.last_serial += 1;
            Ok(number)
        }
    }
}

pub use memory::{MemoryBillStore, MemorySettingsStore};

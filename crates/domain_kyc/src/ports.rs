//! KYC Domain Ports
//!
//! Port interface for the KYC record store plus the in-memory adapter
//! behind it. Records are append-only; the store never edits or deletes.

use std::collections::HashSet;

use async_trait::async_trait;

use core_kernel::{
    DomainPort, HealthCheckResult, HealthCheckable, KycId, OperationMetadata, PortError,
    TransactionId,
};

use crate::record::KycRecord;

/// The main port trait for KYC record operations
#[async_trait]
pub trait KycPort: DomainPort + HealthCheckable {
    /// Lists all records, oldest first
    async fn list(
        &self,
        metadata: Option<OperationMetadata>,
    ) -> Result<Vec<KycRecord>, PortError>;

    /// Retrieves a record by ID
    async fn get(
        &self,
        id: KycId,
        metadata: Option<OperationMetadata>,
    ) -> Result<KycRecord, PortError>;

    /// Appends a new record
    async fn create(
        &self,
        record: KycRecord,
        metadata: Option<OperationMetadata>,
    ) -> Result<KycRecord, PortError>;

    /// Finds records whose customer name matches, case-insensitively
    async fn find_by_name(
        &self,
        name: &str,
        metadata: Option<OperationMetadata>,
    ) -> Result<Vec<KycRecord>, PortError>;

    /// The union of every record's linked transaction ids
    ///
    /// This is the set the classifier consults to distinguish pending from
    /// completed credits.
    async fn linked_transaction_ids(
        &self,
        metadata: Option<OperationMetadata>,
    ) -> Result<HashSet<TransactionId>, PortError>;
}

/// In-memory implementation of [`KycPort`]
pub mod memory {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// In-memory KYC record store
    #[derive(Debug, Default, Clone)]
    pub struct MemoryKycStore {
        records: Arc<RwLock<Vec<KycRecord>>>,
    }

    impl MemoryKycStore {
        /// Creates an empty store
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a store pre-populated with records, in order
        pub fn with_records(records: Vec<KycRecord>) -> Self {
            Self {
                records: Arc::new(RwLock::new(records)),
            }
        }
    }

    impl DomainPort for MemoryKycStore {}

    #[async_trait]
    impl HealthCheckable for MemoryKycStore {
        async fn health_check(&self) -> HealthCheckResult {
            let count = self.records.read().await.len();
            HealthCheckResult {
                adapter_id: "memory-kyc-store".to_string(),
                status: core_kernel::AdapterHealth::Healthy,
                message: Some(format!("{count} records held")),
                checked_at: chrono::Utc::now(),
            }
        }
    }

    #[async_trait]
    impl KycPort for MemoryKycStore {
        async fn list(
            &self,
            _metadata: Option<OperationMetadata>,
        ) -> Result<Vec<KycRecord>, PortError> {
            Ok(self.records.read().await.clone())
        }

        async fn get(
            &self,
            id: KycId,
            _metadata: Option<OperationMetadata>,
        ) -> Result<KycRecord, PortError> {
            self.records
                .read()
                .await
                .iter()
                .find(|r| r.id == id)
                .cloned()
                .ok_or_else(|| PortError::not_found("KycRecord", id))
        }

        async fn create(
            &self,
            record: KycRecord,
            _metadata: Option<OperationMetadata>,
        ) -> Result<KycRecord, PortError> {
            let mut records = self.records.write().await;
            if records.iter().any(|r| r.id == record.id) {
                return Err(PortError::conflict(format!(
                    "KYC record {} already exists",
                    record.id
                )));
            }
            records.push(record.clone());
            Ok(record)
        }

        async fn find_by_name(
            &self,
            name: &str,
            _metadata: Option<OperationMetadata>,
        ) -> Result<Vec<KycRecord>, PortError> {
            let needle = name.to_lowercase();
            Ok(self
                .records
                .read()
                .await
                .iter()
                .filter(|r| r.name.to_lowercase() == needle)
                .cloned()
                .collect())
        }

        async fn linked_transaction_ids(
            &self,
            _metadata: Option<OperationMetadata>,
        ) -> Result<HashSet<TransactionId>, PortError> {
            Ok(self
                .records
                .read()
                .await
                .iter()
                .flat_map(|r| r.linked_transactions.iter().copied())
                .collect())
        }
    }
}

pub use memory::MemoryKycStore;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(name: &str, pan: &str, linked: Vec<TransactionId>) -> KycRecord {
        KycRecord {
            id: KycId::new_v7(),
            name: name.to_string(),
            pan: pan.to_string(),
            aadhaar_last4: "5678".to_string(),
            gst: None,
            notes: None,
            updated_at: NaiveDate::from_ymd_opt(2024, 4, 18).unwrap(),
            linked_transactions: linked,
        }
    }

    #[tokio::test]
    async fn test_create_and_list_preserves_order() {
        let store = MemoryKycStore::new();
        store
            .create(record("SURESH ENTERPRISES", "ABCDE1234F", vec![]), None)
            .await
            .unwrap();
        store
            .create(record("PRIYA SOLUTIONS", "FGHIJ5678K", vec![]), None)
            .await
            .unwrap();

        let listed = store.list(None).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].name, "SURESH ENTERPRISES");
        assert_eq!(listed[1].name, "PRIYA SOLUTIONS");
    }

    #[tokio::test]
    async fn test_find_by_name_is_case_insensitive() {
        let store = MemoryKycStore::new();
        store
            .create(record("SURESH ENTERPRISES", "ABCDE1234F", vec![]), None)
            .await
            .unwrap();

        let found = store.find_by_name("suresh enterprises", None).await.unwrap();
        assert_eq!(found.len(), 1);

        let missing = store.find_by_name("SURESH", None).await.unwrap();
        assert!(missing.is_empty());
    }

    #[tokio::test]
    async fn test_linked_ids_union_across_records() {
        let a = TransactionId::new();
        let b = TransactionId::new();
        let store = MemoryKycStore::new();
        store
            .create(record("SURESH ENTERPRISES", "ABCDE1234F", vec![a]), None)
            .await
            .unwrap();
        store
            .create(record("PRIYA SOLUTIONS", "FGHIJ5678K", vec![a, b]), None)
            .await
            .unwrap();

        let linked = store.linked_transaction_ids(None).await.unwrap();
        assert_eq!(linked.len(), 2);
        assert!(linked.contains(&a));
        assert!(linked.contains(&b));
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let store = MemoryKycStore::new();
        assert!(store.get(KycId::new(), None).await.unwrap_err().is_not_found());
    }
}

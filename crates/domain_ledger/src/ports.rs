//! Ledger Domain Ports
//!
//! This module defines the port interface for the transaction store and the
//! in-memory adapter behind it. The system of record holds its working set in
//! process memory; the port keeps callers independent of that choice.
//!
//! # Ordering
//!
//! The store preserves insertion order. `list` with a default query returns
//! rows in that order, which downstream aggregation depends on for its
//! first-encounter grouping; display ordering is opt-in through
//! [`TransactionQuery::newest_first`].

use async_trait::async_trait;
use chrono::NaiveDate;

use core_kernel::{
    Amount, BillNumber, DomainPort, HealthCheckResult, HealthCheckable, OperationMetadata,
    PortError, TransactionId,
};

use crate::transaction::{Transaction, TransactionQuery};

/// Request for updating a transaction's statement fields
///
/// KYC status and bill references are deliberately absent: those advance only
/// through their dedicated operations.
#[derive(Debug, Clone, Default)]
pub struct UpdateTransactionRequest {
    pub date: Option<NaiveDate>,
    pub sender: Option<String>,
    pub particulars: Option<String>,
    pub amount: Option<Amount>,
}

/// The main port trait for transaction store operations
#[async_trait]
pub trait TransactionPort: DomainPort + HealthCheckable {
    /// Lists transactions matching the query, in store order unless the
    /// query requests sorting
    async fn list(
        &self,
        query: TransactionQuery,
        metadata: Option<OperationMetadata>,
    ) -> Result<Vec<Transaction>, PortError>;

    /// Retrieves a transaction by ID
    async fn get(
        &self,
        id: TransactionId,
        metadata: Option<OperationMetadata>,
    ) -> Result<Transaction, PortError>;

    /// Appends a new transaction
    async fn create(
        &self,
        transaction: Transaction,
        metadata: Option<OperationMetadata>,
    ) -> Result<Transaction, PortError>;

    /// Updates a transaction's statement fields
    async fn update(
        &self,
        id: TransactionId,
        request: UpdateTransactionRequest,
        metadata: Option<OperationMetadata>,
    ) -> Result<Transaction, PortError>;

    /// Removes a transaction
    async fn delete(
        &self,
        id: TransactionId,
        metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError>;

    /// Advances the listed transactions from pending to completed KYC
    ///
    /// Ids that are unknown or not pending are skipped. Returns the number
    /// of transactions that changed state.
    async fn mark_kyc_completed(
        &self,
        ids: &[TransactionId],
        metadata: Option<OperationMetadata>,
    ) -> Result<usize, PortError>;

    /// Binds a bill number to a transaction
    ///
    /// Fails with a conflict if the transaction is already billed.
    async fn set_bill_number(
        &self,
        id: TransactionId,
        number: BillNumber,
        metadata: Option<OperationMetadata>,
    ) -> Result<(), PortError>;
}

/// In-memory implementation of [`TransactionPort`]
///
/// Rows live in an insertion-ordered vector behind an async read-write lock,
/// matching the sequential single-writer access pattern of the workflow.
pub mod memory {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// In-memory transaction store
    #[derive(Debug, Default, Clone)]
    pub struct MemoryTransactionStore {
        transactions: Arc<RwLock<Vec<Transaction>>>,
    }

    impl MemoryTransactionStore {
        /// Creates an empty store
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a store pre-populated with transactions, in order
        pub fn with_transactions(transactions: Vec<Transaction>) -> Self {
            Self {
                transactions: Arc::new(RwLock::new(transactions)),
            }
        }
    }

    impl DomainPort for MemoryTransactionStore {}

    #[async_trait]
    impl HealthCheckable for MemoryTransactionStore {
        async fn health_check(&self) -> HealthCheckResult {
            let count = self.transactions.read().await.len();
            HealthCheckResult {
                adapter_id: "memory-transaction-store".to_string(),
                status: core_kernel::AdapterHealth::Healthy,
                message: Some(format!("{count} transactions held")),
                checked_at: chrono::Utc::now(),
            }
        }
    }

    #[async_trait]
    impl TransactionPort for MemoryTransactionStore {
        async fn list(
            &self,
            query: TransactionQuery,
            _metadata: Option<OperationMetadata>,
        ) -> Result<Vec<Transaction>, PortError> {
            let transactions = self.transactions.read().await;
            Ok(query.apply(&transactions))
        }

        async fn get(
            &self,
            id: TransactionId,
            _metadata: Option<OperationMetadata>,
        ) -> Result<Transaction, PortError> {
            self.transactions
                .read()
                .await
                .iter()
                .find(|t| t.id == id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Transaction", id))
        }

        async fn create(
            &self,
            transaction: Transaction,
            _metadata: Option<OperationMetadata>,
        ) -> Result<Transaction, PortError> {
            let mut transactions = self.transactions.write().await;
            if transactions.iter().any(|t| t.id == transaction.id) {
                return Err(PortError::conflict(format!(
                    "transaction {} already exists",
                    transaction.id
                )));
            }
            transactions.push(transaction.clone());
            Ok(transaction)
        }

        async fn update(
            &self,
            id: TransactionId,
            request: UpdateTransactionRequest,
            _metadata: Option<OperationMetadata>,
        ) -> Result<Transaction, PortError> {
            let mut transactions = self.transactions.write().await;
            let transaction = transactions
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or_else(|| PortError::not_found("Transaction", id))?;

            if let Some(date) = request.date {
                transaction.date = date;
            }
            if let Some(sender) = request.sender {
                transaction.sender = sender;
            }
            if let Some(particulars) = request.particulars {
                transaction.particulars = particulars;
            }
            if let Some(amount) = request.amount {
                transaction.amount = amount;
            }

            Ok(transaction.clone())
        }

        async fn delete(
            &self,
            id: TransactionId,
            _metadata: Option<OperationMetadata>,
        ) -> Result<(), PortError> {
            let mut transactions = self.transactions.write().await;
            let before = transactions.len();
            transactions.retain(|t| t.id != id);
            if transactions.len() == before {
                return Err(PortError::not_found("Transaction", id));
            }
            Ok(())
        }

        async fn mark_kyc_completed(
            &self,
            ids: &[TransactionId],
            _metadata: Option<OperationMetadata>,
        ) -> Result<usize, PortError> {
            let mut transactions = self.transactions.write().await;
            let mut changed = 0;
            for transaction in transactions.iter_mut() {
                if ids.contains(&transaction.id) && transaction.mark_kyc_completed() {
                    changed += 1;
                }
            }
            tracing::debug!(requested = ids.len(), changed, "marked KYC completed");
            Ok(changed)
        }

        async fn set_bill_number(
            &self,
            id: TransactionId,
            number: BillNumber,
            _metadata: Option<OperationMetadata>,
        ) -> Result<(), PortError> {
            let mut transactions = self.transactions.write().await;
            let transaction = transactions
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or_else(|| PortError::not_found("Transaction", id))?;

            transaction
                .set_bill_number(number)
                .map_err(|e| PortError::conflict(e.to_string()))
        }
    }
}

pub use memory::MemoryTransactionStore;

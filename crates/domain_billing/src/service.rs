//! Billing application service
//!
//! Ties bill generation to the ledger and the shared sequence: a bill can
//! be generated once per transaction, numbered from the settings store's
//! counter, and the transaction is stamped with the resulting number.

use std::sync::Arc;

use core_kernel::TransactionId;
use domain_ledger::TransactionPort;

use crate::bill::Bill;
use crate::error::BillingError;
use crate::export;
use crate::ports::{BillPort, BillingSettings, SettingsPort};

/// Service for bill generation, export, and cleanup
pub struct BillingService {
    bills: Arc<dyn BillPort>,
    settings: Arc<dyn SettingsPort>,
    ledger: Arc<dyn TransactionPort>,
}

impl BillingService {
    pub fn new(
        bills: Arc<dyn BillPort>,
        settings: Arc<dyn SettingsPort>,
        ledger: Arc<dyn TransactionPort>,
    ) -> Self {
        Self {
            bills,
            settings,
            ledger,
        }
    }

    /// Generates a bill for a transaction
    ///
    /// Fails with not-found for an unknown transaction and with
    /// already-billed when the transaction carries a bill reference; both
    /// rejections happen before any store mutates. The bill number takes
    /// the year from the transaction's date and the next value of the
    /// shared sequence.
    pub async fn generate(
        &self,
        transaction_id: TransactionId,
        notes: Option<String>,
    ) -> Result<Bill, BillingError> {
        let transaction = self
            .ledger
            .get(transaction_id, None)
            .await
            .map_err(|e| match e {
                e if e.is_not_found() => BillingError::not_found(transaction_id),
                e => BillingError::Store(e),
            })?;

        if let Some(existing) = transaction.bill_id {
            return Err(BillingError::AlreadyBilled {
                id: transaction_id.to_string(),
                bill_number: existing.to_string(),
            });
        }

        let bill_number = self
            .settings
            .issue_bill_number(transaction.year(), None)
            .await?;

        // The store-level guard catches a concurrent generation between the
        // check above and this stamp
        self.ledger
            .set_bill_number(transaction_id, bill_number, None)
            .await?;

        let bill = Bill::for_transaction(&transaction, bill_number, notes);
        let bill = self.bills.create(bill, None).await?;

        tracing::info!(
            bill_number = %bill.bill_number,
            transaction_id = %transaction_id,
            customer = %bill.customer,
            "generated bill"
        );
        Ok(bill)
    }

    /// Lists all bills
    pub async fn list(&self) -> Result<Vec<Bill>, BillingError> {
        Ok(self.bills.list(None).await?)
    }

    /// Renders one month's bills as a CSV document
    pub async fn export_month(&self, year: i32, month: u32) -> Result<Vec<u8>, BillingError> {
        let bills = self.bills.list_month(year, month, None).await?;
        tracing::info!(year, month, bills = bills.len(), "exporting monthly bills");
        export::write_csv(&bills)
    }

    /// Deletes one month's bills, returning how many were removed
    pub async fn purge_month(&self, year: i32, month: u32) -> Result<usize, BillingError> {
        let removed = self.bills.purge_month(year, month, None).await?;
        tracing::info!(year, month, removed, "purged monthly bills");
        Ok(removed)
    }

    /// Reads the billing settings
    pub async fn settings(&self) -> Result<BillingSettings, BillingError> {
        Ok(self.settings.get(None).await?)
    }

    /// Overwrites the billing settings
    pub async fn save_settings(&self, settings: BillingSettings) -> Result<(), BillingError> {
        self.settings.save(settings, None).await?;
        tracing::info!(last_serial = settings.last_serial, "saved billing settings");
        Ok(())
    }
}

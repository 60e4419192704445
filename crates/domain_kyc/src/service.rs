//! KYC application service
//!
//! Orchestrates the verification workflow across the record store and the
//! ledger: validated saves, classification of credits against the linked-id
//! set, and identity autocomplete for the verification form.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use core_kernel::KycId;
use domain_ledger::{KycStatus, Transaction, TransactionPort};

use crate::classifier;
use crate::error::KycError;
use crate::ports::KycPort;
use crate::record::{KycRecord, SaveKycRequest};
use crate::validation::KycValidator;

/// Previously seen identity values for a customer name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentitySuggestions {
    pub pans: Vec<String>,
    pub aadhaars: Vec<String>,
    pub gsts: Vec<String>,
}

/// Service for the KYC workflow
pub struct KycService {
    records: Arc<dyn KycPort>,
    ledger: Arc<dyn TransactionPort>,
}

impl KycService {
    pub fn new(records: Arc<dyn KycPort>, ledger: Arc<dyn TransactionPort>) -> Self {
        Self { records, ledger }
    }

    /// Saves a KYC record and advances the linked transactions
    ///
    /// Fails without touching any store when every identity field is empty.
    /// On success the record is persisted with a generated id and today's
    /// date, and each linked pending credit moves to completed. This is the
    /// only path by which a transaction's KYC status advances.
    pub async fn save(&self, request: SaveKycRequest) -> Result<KycRecord, KycError> {
        let validation = KycValidator::validate(&request);
        if !validation.is_valid {
            return Err(KycError::validation_failed(validation.errors));
        }
        for warning in &validation.warnings {
            tracing::warn!(customer = %request.name, "{warning}");
        }

        let record = KycRecord {
            id: KycId::new_v7(),
            name: request.name,
            pan: request.pan,
            aadhaar_last4: request.aadhaar_last4,
            gst: request.gst.filter(|g| !g.trim().is_empty()),
            notes: request.notes.filter(|n| !n.trim().is_empty()),
            updated_at: Utc::now().date_naive(),
            linked_transactions: request.linked_transactions,
        };

        let record = self.records.create(record, None).await?;
        let advanced = self
            .ledger
            .mark_kyc_completed(&record.linked_transactions, None)
            .await?;

        tracing::info!(
            record_id = %record.id,
            customer = %record.name,
            linked = record.linked_transactions.len(),
            advanced,
            "saved KYC record"
        );
        Ok(record)
    }

    /// Lists all saved records
    pub async fn list(&self) -> Result<Vec<KycRecord>, KycError> {
        Ok(self.records.list(None).await?)
    }

    /// Classifies a transaction against the current record set
    pub async fn classify(&self, transaction: &Transaction) -> Result<KycStatus, KycError> {
        let linked = self.records.linked_transaction_ids(None).await?;
        Ok(classifier::classify(transaction, &linked))
    }

    /// Returns identity values previously recorded for the customer name
    ///
    /// Matching is case-insensitive equality on the record name. Values are
    /// deduplicated in first-seen order. Purely advisory; nothing here is
    /// validated against the classifier.
    pub async fn suggestions(&self, name: &str) -> Result<IdentitySuggestions, KycError> {
        let records = self.records.find_by_name(name, None).await?;

        let mut suggestions = IdentitySuggestions::default();
        let mut seen: HashSet<String> = HashSet::new();
        for record in records {
            if !record.pan.is_empty() && seen.insert(format!("pan:{}", record.pan)) {
                suggestions.pans.push(record.pan.clone());
            }
            if !record.aadhaar_last4.is_empty()
                && seen.insert(format!("aadhaar:{}", record.aadhaar_last4))
            {
                suggestions.aadhaars.push(record.aadhaar_last4.clone());
            }
            if let Some(gst) = &record.gst {
                if !gst.is_empty() && seen.insert(format!("gst:{gst}")) {
                    suggestions.gsts.push(gst.clone());
                }
            }
        }

        tracing::debug!(
            customer = name,
            pans = suggestions.pans.len(),
            aadhaars = suggestions.aadhaars.len(),
            gsts = suggestions.gsts.len(),
            "identity suggestions"
        );
        Ok(suggestions)
    }
}

//! Transaction request/response DTOs

use chrono::NaiveDate;
use serde::Deserialize;

use core_kernel::Amount;
use domain_kyc::review_threshold;
use domain_ledger::{Transaction, TransactionQuery, TransactionType, UpdateTransactionRequest};

use crate::error::ApiError;

/// Body for creating a transaction
///
/// The KYC status is never accepted from the caller; ingest classifies it.
#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    pub date: NaiveDate,
    pub sender: String,
    pub particulars: String,
    pub amount: Amount,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

impl CreateTransactionRequest {
    /// Builds the unclassified transaction entity
    pub fn into_transaction(self) -> Transaction {
        Transaction::new(
            self.date,
            self.sender,
            self.particulars,
            self.amount,
            self.transaction_type,
        )
    }
}

/// Body for updating a transaction's statement fields
#[derive(Debug, Deserialize, Default)]
pub struct UpdateTransactionBody {
    pub date: Option<NaiveDate>,
    pub sender: Option<String>,
    pub particulars: Option<String>,
    pub amount: Option<Amount>,
}

impl From<UpdateTransactionBody> for UpdateTransactionRequest {
    fn from(body: UpdateTransactionBody) -> Self {
        UpdateTransactionRequest {
            date: body.date,
            sender: body.sender,
            particulars: body.particulars,
            amount: body.amount,
        }
    }
}

/// Query-string filters for the transaction list
///
/// Mirrors the dashboard's list controls; `amountFilter=above50k` keeps only
/// the KYC-review candidates.
#[derive(Debug, Deserialize, Default)]
pub struct ListTransactionsParams {
    #[serde(rename = "type")]
    pub transaction_type: Option<TransactionType>,
    #[serde(rename = "amountFilter")]
    pub amount_filter: Option<String>,
    pub search: Option<String>,
    #[serde(rename = "dateFrom")]
    pub date_from: Option<NaiveDate>,
    #[serde(rename = "dateTo")]
    pub date_to: Option<NaiveDate>,
    #[serde(rename = "newestFirst", default)]
    pub newest_first: bool,
}

impl ListTransactionsParams {
    /// Converts the wire parameters to a domain query
    pub fn into_query(self) -> Result<TransactionQuery, ApiError> {
        let min_amount = match self.amount_filter.as_deref() {
            None | Some("") => None,
            Some("above50k") => Some(review_threshold()),
            Some(other) => {
                return Err(ApiError::BadRequest(format!(
                    "unknown amountFilter: {other}"
                )))
            }
        };

        Ok(TransactionQuery {
            transaction_type: self.transaction_type,
            min_amount,
            search: self.search.filter(|s| !s.is_empty()),
            date_from: self.date_from,
            date_to: self.date_to,
            newest_first: self.newest_first,
        })
    }
}

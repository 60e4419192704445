//! Bank transaction entity and list filtering
//!
//! A transaction is one parsed bank-statement row. The engine never edits a
//! transaction's monetary fields after ingest; the only mutable state is the
//! KYC status (forward-only) and the bill reference (set once).

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use core_kernel::{Amount, BillNumber, TransactionId};

use crate::error::LedgerError;

/// Direction of a bank transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    /// Money received
    Credit,
    /// Money paid out
    Debit,
}

/// Identity-verification state of a transaction
///
/// Debits and small credits are `NotApplicable`. A large credit starts
/// `Pending` and advances to `Completed` exactly once, when a KYC record
/// listing it is saved. There is no backward transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KycStatus {
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "COMPLETED")]
    Completed,
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl KycStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, KycStatus::Pending)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, KycStatus::Completed)
    }
}

/// One bank-statement row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, immutable once created
    pub id: TransactionId,
    /// Value date of the statement row
    pub date: NaiveDate,
    /// Counterparty name; the grouping key for KYC and TDS
    pub sender: String,
    /// Free-text narration from the statement; no meaning to the engine
    pub particulars: String,
    /// Non-negative amount in whole rupees
    pub amount: Amount,
    /// Credit or debit
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Identity-verification state
    #[serde(rename = "kycStatus")]
    pub kyc_status: KycStatus,
    /// Reference to the bill generated for this transaction, if any
    #[serde(rename = "billId")]
    pub bill_id: Option<BillNumber>,
}

impl Transaction {
    /// Creates a transaction with no KYC requirement and no bill
    ///
    /// Ingest is expected to stamp the real KYC status via the classifier
    /// before the transaction is stored.
    pub fn new(
        date: NaiveDate,
        sender: impl Into<String>,
        particulars: impl Into<String>,
        amount: Amount,
        transaction_type: TransactionType,
    ) -> Self {
        Self {
            id: TransactionId::new_v7(),
            date,
            sender: sender.into(),
            particulars: particulars.into(),
            amount,
            transaction_type,
            kyc_status: KycStatus::NotApplicable,
            bill_id: None,
        }
    }

    pub fn is_credit(&self) -> bool {
        self.transaction_type == TransactionType::Credit
    }

    pub fn is_debit(&self) -> bool {
        self.transaction_type == TransactionType::Debit
    }

    /// Calendar year of the value date, used for bill numbering
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Advances the KYC status to completed
    ///
    /// Only a pending transaction advances; completed stays completed and
    /// not-applicable rows are left untouched. Returns whether the status
    /// changed.
    pub fn mark_kyc_completed(&mut self) -> bool {
        if self.kyc_status.is_pending() {
            self.kyc_status = KycStatus::Completed;
            true
        } else {
            false
        }
    }

    /// Binds a bill to this transaction, at most once
    pub fn set_bill_number(&mut self, number: BillNumber) -> Result<(), LedgerError> {
        if let Some(existing) = self.bill_id {
            return Err(LedgerError::AlreadyBilled {
                id: self.id.to_string(),
                bill_number: existing.to_string(),
            });
        }
        self.bill_id = Some(number);
        Ok(())
    }
}

/// Filter criteria for listing transactions
///
/// Mirrors the dashboard's list controls. An empty query matches everything
/// and preserves store order; `newest_first` opts into date-descending
/// ordering for display.
#[derive(Debug, Clone, Default)]
pub struct TransactionQuery {
    /// Filter by direction
    pub transaction_type: Option<TransactionType>,
    /// Keep only rows with amount at or above this value
    pub min_amount: Option<Amount>,
    /// Case-insensitive substring match on the sender name
    pub search: Option<String>,
    /// Inclusive lower bound on the value date
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound on the value date
    pub date_to: Option<NaiveDate>,
    /// Sort by value date, newest first
    pub newest_first: bool,
}

impl TransactionQuery {
    /// Creates a query matching only the given direction
    pub fn by_type(transaction_type: TransactionType) -> Self {
        Self {
            transaction_type: Some(transaction_type),
            ..Default::default()
        }
    }

    /// Returns true if the transaction satisfies every set criterion
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if let Some(transaction_type) = self.transaction_type {
            if transaction.transaction_type != transaction_type {
                return false;
            }
        }
        if let Some(min_amount) = self.min_amount {
            if transaction.amount < min_amount {
                return false;
            }
        }
        if let Some(ref search) = self.search {
            let needle = search.to_lowercase();
            if !transaction.sender.to_lowercase().contains(&needle) {
                return false;
            }
        }
        if let Some(from) = self.date_from {
            if transaction.date < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if transaction.date > to {
                return false;
            }
        }
        true
    }

    /// Filters (and optionally sorts) a transaction slice
    pub fn apply(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        let mut matched: Vec<Transaction> = transactions
            .iter()
            .filter(|t| self.matches(t))
            .cloned()
            .collect();
        if self.newest_first {
            // Stable sort keeps store order within a single date
            matched.sort_by(|a, b| b.date.cmp(&a.date));
        }
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(date: &str, sender: &str, amount: u64, transaction_type: TransactionType) -> Transaction {
        Transaction::new(
            date.parse().unwrap(),
            sender,
            format!("NEFT/{}/TEST", sender),
            Amount::rupees(amount),
            transaction_type,
        )
    }

    #[test]
    fn test_new_transaction_defaults() {
        let t = txn("2024-04-22", "VENDOR ABC", 280_000, TransactionType::Debit);
        assert_eq!(t.kyc_status, KycStatus::NotApplicable);
        assert!(t.bill_id.is_none());
        assert_eq!(t.year(), 2024);
    }

    #[test]
    fn test_mark_kyc_completed_is_forward_only() {
        let mut t = txn("2024-04-15", "MR KALAI", 75_000, TransactionType::Credit);
        t.kyc_status = KycStatus::Pending;

        assert!(t.mark_kyc_completed());
        assert_eq!(t.kyc_status, KycStatus::Completed);

        // Second call is a no-op, never a revert
        assert!(!t.mark_kyc_completed());
        assert_eq!(t.kyc_status, KycStatus::Completed);
    }

    #[test]
    fn test_set_bill_number_only_once() {
        let mut t = txn("2024-04-18", "SURESH ENTERPRISES", 150_000, TransactionType::Credit);
        t.set_bill_number(core_kernel::BillNumber::new(2024, 1)).unwrap();

        let err = t.set_bill_number(core_kernel::BillNumber::new(2024, 2)).unwrap_err();
        assert!(matches!(err, LedgerError::AlreadyBilled { .. }));
        assert_eq!(t.bill_id, Some(core_kernel::BillNumber::new(2024, 1)));
    }

    #[test]
    fn test_query_type_filter() {
        let rows = vec![
            txn("2024-04-15", "MR KALAI", 75_000, TransactionType::Credit),
            txn("2024-04-22", "VENDOR ABC", 280_000, TransactionType::Debit),
        ];
        let credits = TransactionQuery::by_type(TransactionType::Credit).apply(&rows);
        assert_eq!(credits.len(), 1);
        assert_eq!(credits[0].sender, "MR KALAI");
    }

    #[test]
    fn test_query_min_amount_is_inclusive() {
        let rows = vec![
            txn("2024-04-15", "A", 49_999, TransactionType::Credit),
            txn("2024-04-16", "B", 50_000, TransactionType::Credit),
        ];
        let query = TransactionQuery {
            min_amount: Some(Amount::rupees(50_000)),
            ..Default::default()
        };
        let matched = query.apply(&rows);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].sender, "B");
    }

    #[test]
    fn test_query_search_is_case_insensitive() {
        let rows = vec![
            txn("2024-04-15", "SURESH ENTERPRISES", 150_000, TransactionType::Credit),
            txn("2024-04-16", "KUMAR SERVICES", 45_000, TransactionType::Credit),
        ];
        let query = TransactionQuery {
            search: Some("suresh".to_string()),
            ..Default::default()
        };
        assert_eq!(query.apply(&rows).len(), 1);
    }

    #[test]
    fn test_query_date_range_inclusive() {
        let rows = vec![
            txn("2024-04-15", "A", 1, TransactionType::Credit),
            txn("2024-05-02", "B", 1, TransactionType::Credit),
            txn("2024-05-20", "C", 1, TransactionType::Credit),
        ];
        let query = TransactionQuery {
            date_from: Some("2024-05-02".parse().unwrap()),
            date_to: Some("2024-05-20".parse().unwrap()),
            ..Default::default()
        };
        assert_eq!(query.apply(&rows).len(), 2);
    }

    #[test]
    fn test_query_newest_first_sorting() {
        let rows = vec![
            txn("2024-04-15", "A", 1, TransactionType::Credit),
            txn("2024-05-20", "C", 1, TransactionType::Credit),
            txn("2024-05-02", "B", 1, TransactionType::Credit),
        ];
        let query = TransactionQuery {
            newest_first: true,
            ..Default::default()
        };
        let sorted = query.apply(&rows);
        let senders: Vec<&str> = sorted.iter().map(|t| t.sender.as_str()).collect();
        assert_eq!(senders, vec!["C", "B", "A"]);
    }

    #[test]
    fn test_wire_format_field_names() {
        let t = txn("2024-04-15", "MR KALAI", 75_000, TransactionType::Credit);
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["type"], "CREDIT");
        assert_eq!(json["kycStatus"], "N/A");
        assert_eq!(json["billId"], serde_json::Value::Null);
        assert_eq!(json["amount"], serde_json::json!(75000));
    }
}

//! Vendor payment aggregation
//!
//! Sums outgoing payments per vendor and bands each vendor against the
//! withholding-tax thresholds. The computation is total over any
//! transaction list, including an empty one; there are no failure modes.
//!
//! Grouping is by exact `sender` string. No casing or whitespace
//! normalization is applied, so two spellings of the same vendor produce
//! two rows. Despite the `paid_ytd` name, totals cover every debit ever
//! seen, not the current year.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use core_kernel::{Amount, TransactionId};
use domain_ledger::Transaction;

/// A vendor's outgoing total crosses into withholding territory at this amount
pub const TDS_REQUIRED_THRESHOLD_RUPEES: u64 = 5_000_000;

/// Vendors at or above this total are flagged as approaching the limit
pub const TDS_NEARING_THRESHOLD_RUPEES: u64 = 4_000_000;

/// Withholding band for a vendor's cumulative payments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TdsStatus {
    #[serde(rename = "UNDER_LIMIT")]
    UnderLimit,
    #[serde(rename = "NEARING_LIMIT")]
    NearingLimit,
    #[serde(rename = "TDS_REQUIRED")]
    TdsRequired,
}

impl TdsStatus {
    /// Bands a cumulative total; both thresholds are inclusive lower bounds
    pub fn for_total(total: Amount) -> Self {
        if total >= Amount::rupees(TDS_REQUIRED_THRESHOLD_RUPEES) {
            TdsStatus::TdsRequired
        } else if total >= Amount::rupees(TDS_NEARING_THRESHOLD_RUPEES) {
            TdsStatus::NearingLimit
        } else {
            TdsStatus::UnderLimit
        }
    }
}

/// Cumulative payment position of one vendor, derived, never persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorSummary {
    /// Synthetic `vendor_<index>` id assigned in emission order; not stable
    /// across re-aggregation if the underlying transaction order changes
    pub id: String,
    /// Counterparty name, exactly as it appears on the debit rows
    pub vendor: String,
    /// Sum of all debit amounts for this vendor
    #[serde(rename = "paidYTD")]
    pub paid_ytd: Amount,
    pub status: TdsStatus,
    /// Contributing transaction ids, in encounter order
    pub transactions: Vec<TransactionId>,
}

/// Aggregates debits by vendor and bands each total
///
/// Output rows appear in order of each vendor's first debit in the input.
pub fn aggregate(transactions: &[Transaction]) -> Vec<VendorSummary> {
    let mut index_by_vendor: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(String, Amount, Vec<TransactionId>)> = Vec::new();

    for transaction in transactions.iter().filter(|t| t.is_debit()) {
        match index_by_vendor.get(transaction.sender.as_str()) {
            Some(&index) => {
                let group = &mut groups[index];
                group.1 = group.1 + transaction.amount;
                group.2.push(transaction.id);
            }
            None => {
                index_by_vendor.insert(transaction.sender.as_str(), groups.len());
                groups.push((
                    transaction.sender.clone(),
                    transaction.amount,
                    vec![transaction.id],
                ));
            }
        }
    }

    let summaries: Vec<VendorSummary> = groups
        .into_iter()
        .enumerate()
        .map(|(index, (vendor, total, transactions))| VendorSummary {
            id: format!("vendor_{index}"),
            vendor,
            paid_ytd: total,
            status: TdsStatus::for_total(total),
            transactions,
        })
        .collect();

    tracing::debug!(
        vendors = summaries.len(),
        flagged = summaries
            .iter()
            .filter(|s| s.status == TdsStatus::TdsRequired)
            .count(),
        "aggregated vendor payments"
    );
    summaries
}

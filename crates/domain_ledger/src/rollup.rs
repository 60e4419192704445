//! Monthly credit/debit rollup
//!
//! Sums inflow and outflow per calendar month over the full transaction set,
//! in chronological order, for the dashboard chart.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use core_kernel::Amount;

use crate::transaction::Transaction;

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Credit and debit totals for one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyFlow {
    pub year: i32,
    /// 1-based calendar month
    pub month: u32,
    /// Short month label ("Jan".."Dec")
    pub label: String,
    pub credits: Amount,
    pub debits: Amount,
}

/// Computes per-month totals, oldest month first
///
/// Months with no transactions are absent from the output rather than
/// emitted as zero rows.
pub fn monthly_flows(transactions: &[Transaction]) -> Vec<MonthlyFlow> {
    use chrono::Datelike;

    let mut buckets: BTreeMap<(i32, u32), (Amount, Amount)> = BTreeMap::new();

    for transaction in transactions {
        let key = (transaction.date.year(), transaction.date.month());
        let entry = buckets.entry(key).or_insert((Amount::zero(), Amount::zero()));
        if transaction.is_credit() {
            entry.0 = entry.0 + transaction.amount;
        } else {
            entry.1 = entry.1 + transaction.amount;
        }
    }

    buckets
        .into_iter()
        .map(|((year, month), (credits, debits))| MonthlyFlow {
            year,
            month,
            label: MONTH_LABELS[(month - 1) as usize].to_string(),
            credits,
            debits,
        })
        .collect()
}

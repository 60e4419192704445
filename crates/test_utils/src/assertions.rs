//! Custom assertion helpers for domain types

use domain_ledger::{KycStatus, Transaction};
use domain_tds::{TdsStatus, VendorSummary};

/// Asserts a transaction is awaiting verification
pub fn assert_kyc_pending(transaction: &Transaction) {
    assert_eq!(
        transaction.kyc_status,
        KycStatus::Pending,
        "expected {} ({}) to be pending KYC",
        transaction.id,
        transaction.sender
    );
}

/// Asserts a transaction's verification is complete
pub fn assert_kyc_completed(transaction: &Transaction) {
    assert_eq!(
        transaction.kyc_status,
        KycStatus::Completed,
        "expected {} ({}) to have completed KYC",
        transaction.id,
        transaction.sender
    );
}

/// Asserts a vendor appears in the summary with the given band
pub fn assert_vendor_status(summaries: &[VendorSummary], vendor: &str, status: TdsStatus) {
    let summary = summaries
        .iter()
        .find(|s| s.vendor == vendor)
        .unwrap_or_else(|| panic!("vendor {vendor} missing from summary"));
    assert_eq!(
        summary.status, status,
        "vendor {vendor} at {} has wrong band",
        summary.paid_ytd
    );
}

/// Asserts transactions are ordered newest first
pub fn assert_newest_first(transactions: &[Transaction]) {
    for window in transactions.windows(2) {
        assert!(
            window[0].date >= window[1].date,
            "transactions out of order: {} before {}",
            window[0].date,
            window[1].date
        );
    }
}

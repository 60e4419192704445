//! KYC classification of transactions
//!
//! Pure rules deciding whether a transaction needs identity verification.
//! Verification applies to incoming money only, and only above a review
//! threshold; the linked-transaction sets of existing records determine
//! whether a qualifying credit is still waiting.

use std::collections::HashSet;

use core_kernel::{Amount, TransactionId};
use domain_ledger::{KycStatus, Transaction};

/// Credits at or above this amount require identity verification
pub const KYC_REVIEW_THRESHOLD_RUPEES: u64 = 50_000;

/// The review threshold as an amount
pub fn review_threshold() -> Amount {
    Amount::rupees(KYC_REVIEW_THRESHOLD_RUPEES)
}

/// Classifies one transaction against the current set of linked ids
///
/// Debits never require verification. Credits below the threshold do not
/// either. A qualifying credit is `Completed` when some record links it and
/// `Pending` otherwise. Pure function; the caller supplies the linked-id
/// set from the record store.
pub fn classify(transaction: &Transaction, linked: &HashSet<TransactionId>) -> KycStatus {
    if transaction.is_debit() {
        return KycStatus::NotApplicable;
    }
    if transaction.amount < review_threshold() {
        return KycStatus::NotApplicable;
    }
    if linked.contains(&transaction.id) {
        KycStatus::Completed
    } else {
        KycStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_ledger::TransactionType;

    fn txn(amount: u64, transaction_type: TransactionType) -> Transaction {
        Transaction::new(
            "2024-04-15".parse().unwrap(),
            "MR KALAI",
            "UPI/CR/408552127716/MR KALAI/PAYTM",
            Amount::rupees(amount),
            transaction_type,
        )
    }

    #[test]
    fn test_debits_never_require_kyc() {
        let linked = HashSet::new();
        for amount in [1, 50_000, 5_000_000] {
            let t = txn(amount, TransactionType::Debit);
            assert_eq!(classify(&t, &linked), KycStatus::NotApplicable);
        }
    }

    #[test]
    fn test_threshold_boundary_is_inclusive() {
        let linked = HashSet::new();
        let at = txn(50_000, TransactionType::Credit);
        let below = txn(49_999, TransactionType::Credit);

        assert_eq!(classify(&at, &linked), KycStatus::Pending);
        assert_eq!(classify(&below, &linked), KycStatus::NotApplicable);
    }

    #[test]
    fn test_linked_credit_is_completed() {
        let t = txn(75_000, TransactionType::Credit);
        let linked: HashSet<TransactionId> = [t.id].into_iter().collect();
        assert_eq!(classify(&t, &linked), KycStatus::Completed);
    }

    #[test]
    fn test_small_linked_credit_stays_not_applicable() {
        // Linking a below-threshold credit does not manufacture a requirement
        let t = txn(45_000, TransactionType::Credit);
        let linked: HashSet<TransactionId> = [t.id].into_iter().collect();
        assert_eq!(classify(&t, &linked), KycStatus::NotApplicable);
    }
}

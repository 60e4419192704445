//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use chrono::NaiveDate;
use proptest::prelude::*;

use core_kernel::Amount;
use domain_ledger::{Transaction, TransactionType};

/// Strategy for generating non-negative rupee amounts
pub fn amount_strategy() -> impl Strategy<Value = Amount> {
    (0u64..100_000_000u64).prop_map(Amount::rupees)
}

/// Strategy for generating amounts around the KYC review threshold
pub fn near_threshold_amount_strategy() -> impl Strategy<Value = Amount> {
    (49_990u64..50_010u64).prop_map(Amount::rupees)
}

/// Strategy for generating transaction directions
pub fn transaction_type_strategy() -> impl Strategy<Value = TransactionType> {
    prop_oneof![
        Just(TransactionType::Credit),
        Just(TransactionType::Debit),
    ]
}

/// Strategy for generating dates within the 2024 financial year
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..365u64).prop_map(|days| {
        NaiveDate::from_ymd_opt(2024, 4, 1).unwrap() + chrono::Duration::days(days as i64)
    })
}

/// Strategy for generating counterparty names from a small pool
///
/// A small pool keeps vendor grouping interesting: generated ledgers
/// reliably contain repeat counterparties.
pub fn sender_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("MR KALAI".to_string()),
        Just("SURESH ENTERPRISES".to_string()),
        Just("VENDOR ABC".to_string()),
        Just("VENDOR XYZ".to_string()),
        Just("SUPPLIES CO".to_string()),
        Just("PRIYA SOLUTIONS".to_string()),
    ]
}

/// Strategy for generating whole transactions
pub fn transaction_strategy() -> impl Strategy<Value = Transaction> {
    (
        date_strategy(),
        sender_strategy(),
        amount_strategy(),
        transaction_type_strategy(),
    )
        .prop_map(|(date, sender, amount, transaction_type)| {
            Transaction::new(
                date,
                sender.clone(),
                format!("GEN/{sender}"),
                amount,
                transaction_type,
            )
        })
}

/// Strategy for generating small ledgers
pub fn ledger_strategy(max_len: usize) -> impl Strategy<Value = Vec<Transaction>> {
    proptest::collection::vec(transaction_strategy(), 0..max_len)
}

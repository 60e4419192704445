//! Integration tests for domain_kyc

use std::collections::HashSet;
use std::sync::Arc;

use core_kernel::Amount;
use domain_kyc::{classify, KycService, MemoryKycStore, SaveKycRequest};
use domain_ledger::{
    KycStatus, MemoryTransactionStore, Transaction, TransactionPort, TransactionType,
};

fn credit(sender: &str, amount: u64, status: KycStatus) -> Transaction {
    let mut t = Transaction::new(
        "2024-04-15".parse().unwrap(),
        sender,
        format!("UPI/CR/{sender}"),
        Amount::rupees(amount),
        TransactionType::Credit,
    );
    t.kyc_status = status;
    t
}

fn debit(sender: &str, amount: u64) -> Transaction {
    Transaction::new(
        "2024-04-22".parse().unwrap(),
        sender,
        format!("NEFT/{sender}/SUPPLIES"),
        Amount::rupees(amount),
        TransactionType::Debit,
    )
}

fn service(transactions: Vec<Transaction>) -> (KycService, Arc<MemoryTransactionStore>) {
    let ledger = Arc::new(MemoryTransactionStore::with_transactions(transactions));
    (
        KycService::new(Arc::new(MemoryKycStore::new()), ledger.clone()),
        ledger,
    )
}

// ============================================================================
// Classifier properties
// ============================================================================

#[test]
fn every_debit_classifies_not_applicable() {
    let linked = HashSet::new();
    for amount in [0, 49_999, 50_000, 5_000_000] {
        let t = debit("VENDOR ABC", amount);
        assert_eq!(classify(&t, &linked), KycStatus::NotApplicable);
    }
}

#[test]
fn unlinked_large_credit_is_pending() {
    let t = credit("MR KALAI", 75_000, KycStatus::NotApplicable);
    assert_eq!(classify(&t, &HashSet::new()), KycStatus::Pending);
}

#[test]
fn exact_threshold_credit_is_pending_and_one_below_is_not() {
    assert_eq!(
        classify(&credit("A", 50_000, KycStatus::NotApplicable), &HashSet::new()),
        KycStatus::Pending
    );
    assert_eq!(
        classify(&credit("B", 49_999, KycStatus::NotApplicable), &HashSet::new()),
        KycStatus::NotApplicable
    );
}

// ============================================================================
// Save workflow
// ============================================================================

#[tokio::test]
async fn completed_status_is_permanent_across_reclassification() {
    let transaction = credit("SURESH ENTERPRISES", 150_000, KycStatus::Pending);
    let (service, ledger) = service(vec![transaction.clone()]);

    service
        .save(SaveKycRequest {
            name: "SURESH ENTERPRISES".to_string(),
            pan: "ABCDE1234F".to_string(),
            linked_transactions: vec![transaction.id],
            ..Default::default()
        })
        .await
        .unwrap();

    // Classification keeps answering completed on every subsequent pass
    for _ in 0..3 {
        let reloaded = ledger.get(transaction.id, None).await.unwrap();
        assert_eq!(service.classify(&reloaded).await.unwrap(), KycStatus::Completed);
        assert_eq!(reloaded.kyc_status, KycStatus::Completed);
    }
}

#[tokio::test]
async fn save_succeeds_with_exactly_one_identity_field() {
    for (pan, aadhaar, gst) in [
        ("ABCDE1234F", "", None),
        ("", "5678", None),
        ("", "", Some("33ABCDE1234F1Z5")),
    ] {
        let (service, _ledger) = service(vec![]);
        let result = service
            .save(SaveKycRequest {
                name: "RAJESH TRADING".to_string(),
                pan: pan.to_string(),
                aadhaar_last4: aadhaar.to_string(),
                gst: gst.map(str::to_string),
                ..Default::default()
            })
            .await;
        assert!(result.is_ok(), "save should pass with one identity field");
    }
}

#[tokio::test]
async fn save_only_advances_listed_transactions() {
    let linked = credit("ARUN INDUSTRIES", 85_000, KycStatus::Pending);
    let untouched = credit("TECH SOLUTIONS PVT", 250_000, KycStatus::Pending);
    let (service, ledger) = service(vec![linked.clone(), untouched.clone()]);

    service
        .save(SaveKycRequest {
            name: "ARUN INDUSTRIES".to_string(),
            aadhaar_last4: "9012".to_string(),
            linked_transactions: vec![linked.id],
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(
        ledger.get(linked.id, None).await.unwrap().kyc_status,
        KycStatus::Completed
    );
    assert_eq!(
        ledger.get(untouched.id, None).await.unwrap().kyc_status,
        KycStatus::Pending
    );
}

#[tokio::test]
async fn suggestions_come_only_from_matching_customer() {
    let (service, _ledger) = service(vec![]);

    service
        .save(SaveKycRequest {
            name: "SURESH ENTERPRISES".to_string(),
            pan: "ABCDE1234F".to_string(),
            gst: Some("33ABCDE1234F1Z5".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    service
        .save(SaveKycRequest {
            name: "PRIYA SOLUTIONS".to_string(),
            pan: "FGHIJ5678K".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    let suggestions = service.suggestions("SURESH ENTERPRISES").await.unwrap();
    assert_eq!(suggestions.pans, vec!["ABCDE1234F".to_string()]);
    assert_eq!(suggestions.gsts, vec!["33ABCDE1234F1Z5".to_string()]);
    assert!(suggestions.aadhaars.is_empty());
}

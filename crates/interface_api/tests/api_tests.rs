//! Router-level API tests
//!
//! Drives the full router over seeded in-memory stores, the way the
//! dashboard drives the deployed service.

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use domain_billing::{BillPort, BillingService, MemoryBillStore, MemorySettingsStore, SettingsPort};
use domain_kyc::{KycPort, KycService, MemoryKycStore};
use domain_ledger::{MemoryTransactionStore, TransactionPort};
use interface_api::{config::ApiConfig, create_router, AppState};
use test_utils::LedgerFixtures;

fn seeded_server() -> TestServer {
    let dataset = LedgerFixtures::sample_dataset();

    let ledger: Arc<dyn TransactionPort> =
        Arc::new(MemoryTransactionStore::with_transactions(dataset.transactions));
    let kyc_records: Arc<dyn KycPort> =
        Arc::new(MemoryKycStore::with_records(dataset.kyc_records));
    let bills: Arc<dyn BillPort> = Arc::new(MemoryBillStore::with_bills(dataset.bills));
    let settings: Arc<dyn SettingsPort> =
        Arc::new(MemorySettingsStore::with_serial(dataset.next_serial));

    let state = AppState {
        config: ApiConfig::default(),
        ledger: ledger.clone(),
        kyc_records: kyc_records.clone(),
        bills: bills.clone(),
        settings: settings.clone(),
        kyc: Arc::new(KycService::new(kyc_records, ledger.clone())),
        billing: Arc::new(BillingService::new(bills, settings, ledger)),
    };

    TestServer::new(create_router(state)).expect("router builds")
}

#[tokio::test]
async fn health_endpoints_respond() {
    let server = seeded_server();

    let health = server.get("/health").await;
    health.assert_status_ok();

    let ready = server.get("/health/ready").await;
    ready.assert_status_ok();
    let body: Value = ready.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["adapters"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn transactions_list_and_filter() {
    let server = seeded_server();

    let all: Vec<Value> = server.get("/api/transactions").await.json();
    assert_eq!(all.len(), 15);

    let review_candidates: Vec<Value> = server
        .get("/api/transactions")
        .add_query_param("type", "CREDIT")
        .add_query_param("amountFilter", "above50k")
        .await
        .json();
    // Every credit except the 45,000 one
    assert_eq!(review_candidates.len(), 8);
    assert!(review_candidates
        .iter()
        .all(|t| t["type"] == "CREDIT" && t["amount"].as_u64().unwrap() >= 50_000));
}

#[tokio::test]
async fn unknown_amount_filter_is_a_bad_request() {
    let server = seeded_server();
    let response = server
        .get("/api/transactions")
        .add_query_param("amountFilter", "above1cr")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn ingest_classifies_kyc_status() {
    let server = seeded_server();

    let debit: Value = server
        .post("/api/transactions")
        .json(&json!({
            "date": "2024-06-01",
            "sender": "VENDOR NEW",
            "particulars": "NEFT/VENDOR NEW/SUPPLIES",
            "amount": 9_000_000u64,
            "type": "DEBIT"
        }))
        .await
        .json();
    assert_eq!(debit["kycStatus"], "N/A");

    let boundary: Value = server
        .post("/api/transactions")
        .json(&json!({
            "date": "2024-06-02",
            "sender": "NEW CUSTOMER",
            "particulars": "IMPS/NEW CUSTOMER",
            "amount": 50_000u64,
            "type": "CREDIT"
        }))
        .await
        .json();
    assert_eq!(boundary["kycStatus"], "PENDING");

    let below: Value = server
        .post("/api/transactions")
        .json(&json!({
            "date": "2024-06-03",
            "sender": "SMALL CUSTOMER",
            "particulars": "IMPS/SMALL CUSTOMER",
            "amount": 49_999u64,
            "type": "CREDIT"
        }))
        .await
        .json();
    assert_eq!(below["kycStatus"], "N/A");
}

#[tokio::test]
async fn kyc_save_rejects_missing_identity() {
    let server = seeded_server();

    let response = server
        .post("/api/kyc")
        .json(&json!({
            "name": "MR KALAI",
            "pan": "",
            "aadhaarLast4": "",
            "transactionIds": []
        }))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["error"], "validation_error");
    assert!(body["message"].as_str().unwrap().contains("missing identity field"));
}

#[tokio::test]
async fn kyc_save_completes_linked_transactions() {
    let server = seeded_server();

    // MR KALAI's first credit is pending in the fixture
    let pending: Vec<Value> = server
        .get("/api/transactions")
        .add_query_param("search", "MR KALAI")
        .await
        .json();
    let target = pending
        .iter()
        .find(|t| t["kycStatus"] == "PENDING")
        .expect("fixture has a pending MR KALAI credit");
    let target_id = target["id"].as_str().unwrap().to_string();

    let record: Value = server
        .post("/api/kyc")
        .json(&json!({
            "name": "MR KALAI",
            "pan": "PQRST3456U",
            "aadhaarLast4": "7890",
            "transactionIds": [target_id]
        }))
        .await
        .json();
    assert_eq!(record["name"], "MR KALAI");

    let reloaded: Vec<Value> = server
        .get("/api/transactions")
        .add_query_param("search", "MR KALAI")
        .await
        .json();
    let updated = reloaded
        .iter()
        .find(|t| t["id"].as_str() == Some(target_id.as_str()))
        .unwrap();
    assert_eq!(updated["kycStatus"], "COMPLETED");
}

#[tokio::test]
async fn kyc_autocomplete_flattens_documents() {
    let server = seeded_server();

    let rows: Vec<Value> = server
        .get("/api/kyc/autocomplete")
        .add_query_param("name", "SURESH ENTERPRISES")
        .await
        .json();
    assert!(rows.contains(&json!({ "type": "PAN", "value": "ABCDE1234F" })));
    assert!(rows.contains(&json!({ "type": "AADHAAR", "value": "5678" })));

    let empty: Vec<Value> = server
        .get("/api/kyc/autocomplete")
        .add_query_param("name", "NOBODY")
        .await
        .json();
    assert!(empty.is_empty());
}

#[tokio::test]
async fn tds_summary_bands_vendors() {
    let server = seeded_server();

    // Push VENDOR ABC over the five-million threshold
    server
        .post("/api/transactions")
        .json(&json!({
            "date": "2024-06-10",
            "sender": "VENDOR ABC",
            "particulars": "RTGS/VENDOR ABC/BULK",
            "amount": 3_700_000u64,
            "type": "DEBIT"
        }))
        .await
        .assert_status_ok();

    let summary: Vec<Value> = server.get("/api/tds/summary").await.json();
    let abc = summary.iter().find(|v| v["vendor"] == "VENDOR ABC").unwrap();
    assert_eq!(abc["paidYTD"].as_u64().unwrap(), 5_240_000);
    assert_eq!(abc["status"], "TDS_REQUIRED");

    let xyz = summary.iter().find(|v| v["vendor"] == "VENDOR XYZ").unwrap();
    assert_eq!(xyz["status"], "UNDER_LIMIT");
}

#[tokio::test]
async fn bill_generation_uses_the_seeded_sequence() {
    let server = seeded_server();

    let transactions: Vec<Value> = server.get("/api/transactions").await.json();
    let unbilled = transactions
        .iter()
        .find(|t| t["kycStatus"] == "COMPLETED" && t["billId"].is_null())
        .expect("fixture has a completed unbilled credit");
    let id = unbilled["id"].as_str().unwrap().to_string();

    let bill: Value = server
        .post("/api/bills/generate")
        .json(&json!({ "transactionId": id, "notes": "Monthly retainer" }))
        .await
        .json();
    // The fixture seeds two bills, so the shared counter is at 3
    assert_eq!(bill["billId"], "2024-0003");
    assert_eq!(bill["pdfUrl"], "/bills/2024-0003.pdf");

    // Regenerating for the same transaction conflicts
    let again = server
        .post("/api/bills/generate")
        .json(&json!({ "transactionId": id }))
        .await;
    again.assert_status(StatusCode::CONFLICT);

    let bills: Vec<Value> = server.get("/api/bills").await.json();
    assert_eq!(bills.len(), 3);
}

#[tokio::test]
async fn bill_generation_for_unknown_transaction_is_not_found() {
    let server = seeded_server();

    let response = server
        .post("/api/bills/generate")
        .json(&json!({ "transactionId": "00000000-0000-4000-8000-999999999999" }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    let bills: Vec<Value> = server.get("/api/bills").await.json();
    assert_eq!(bills.len(), 2, "bill store unchanged after failure");
}

#[tokio::test]
async fn settings_round_trip_reseeds_the_sequence() {
    let server = seeded_server();

    let settings: Value = server.get("/api/settings").await.json();
    assert_eq!(settings["lastSerial"], "3");

    server
        .post("/api/saveSettings")
        .add_query_param("lastSerial", "2050")
        .await
        .assert_status_ok();

    let transactions: Vec<Value> = server.get("/api/transactions").await.json();
    let unbilled = transactions
        .iter()
        .find(|t| t["type"] == "CREDIT" && t["billId"].is_null())
        .unwrap();

    let bill: Value = server
        .post("/api/bills/generate")
        .json(&json!({ "transactionId": unbilled["id"] }))
        .await
        .json();
    assert_eq!(bill["billId"], "2024-2050");
}

#[tokio::test]
async fn save_settings_rejects_non_numeric_serial() {
    let server = seeded_server();
    server
        .post("/api/saveSettings")
        .add_query_param("lastSerial", "next")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn auditor_download_returns_csv() {
    let server = seeded_server();

    let response = server
        .get("/api/auditor/bills/download")
        .add_query_param("year", "2024")
        .add_query_param("month", "4")
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "text/csv"
    );

    let text = response.text();
    assert!(text.starts_with("billId,customer,amount,date,transactionId,notes"));
    assert!(text.contains("2024-0001,SURESH ENTERPRISES,150000,2024-04-18"));
    assert!(!text.contains("PRIYA SOLUTIONS"), "May bill excluded");
}

#[tokio::test]
async fn cleanup_purges_one_month() {
    let server = seeded_server();

    let response: Value = server
        .delete("/api/bills/cleanup")
        .add_query_param("year", "2024")
        .add_query_param("month", "4")
        .await
        .json();
    assert_eq!(response["removed"], 1);

    let bills: Vec<Value> = server.get("/api/bills").await.json();
    assert_eq!(bills.len(), 1);
    assert_eq!(bills[0]["billId"], "2024-0002");
}

#[tokio::test]
async fn monthly_report_sums_both_directions() {
    let server = seeded_server();

    let flows: Vec<Value> = server.get("/api/reports/monthly").await.json();
    assert_eq!(flows.len(), 2);

    let april = &flows[0];
    assert_eq!(april["label"], "Apr");
    assert_eq!(april["credits"].as_u64().unwrap(), 365_000);
    assert_eq!(april["debits"].as_u64().unwrap(), 800_000);

    let may = &flows[1];
    assert_eq!(may["label"], "May");
    assert_eq!(may["credits"].as_u64().unwrap(), 575_000);
    assert_eq!(may["debits"].as_u64().unwrap(), 1_870_000);
}

#[tokio::test]
async fn transaction_delete_then_get_is_not_found() {
    let server = seeded_server();

    let transactions: Vec<Value> = server.get("/api/transactions").await.json();
    let id = transactions[0]["id"].as_str().unwrap().to_string();

    server
        .delete(&format!("/api/transactions/{id}"))
        .await
        .assert_status_ok();

    let remaining: Vec<Value> = server.get("/api/transactions").await.json();
    assert_eq!(remaining.len(), 14);

    server
        .delete(&format!("/api/transactions/{id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

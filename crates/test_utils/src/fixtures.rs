//! Pre-built Test Fixtures
//!
//! Provides the canonical sample dataset used across the test suite: a
//! two-month ledger with pending and completed KYC credits, two tracked
//! vendors straddling the TDS thresholds, and two already-generated bills.
//! Ids are deterministic so tests can reference rows directly.

use chrono::NaiveDate;
use uuid::Uuid;

use core_kernel::{Amount, BillNumber, KycId, TransactionId};
use domain_billing::Bill;
use domain_kyc::KycRecord;
use domain_ledger::{KycStatus, Transaction, TransactionType};

/// The canonical sample dataset
#[derive(Debug, Clone)]
pub struct SampleDataset {
    pub transactions: Vec<Transaction>,
    pub kyc_records: Vec<KycRecord>,
    pub bills: Vec<Bill>,
    /// Sequence value the bill counter should start from after the seeded bills
    pub next_serial: u32,
}

/// Fixture for deterministic identifiers
pub struct IdFixtures;

impl IdFixtures {
    /// Deterministic transaction id for index 1..=99
    pub fn transaction_id(index: u32) -> TransactionId {
        TransactionId::from_uuid(
            Uuid::parse_str(&format!("00000000-0000-4000-8000-{index:012}")).unwrap(),
        )
    }

    /// Deterministic KYC record id for index 1..=99
    pub fn kyc_id(index: u32) -> KycId {
        KycId::from_uuid(
            Uuid::parse_str(&format!("00000000-0000-4000-9000-{index:012}")).unwrap(),
        )
    }
}

/// Fixture for dates used across the dataset
pub struct DateFixtures;

impl DateFixtures {
    pub fn date(s: &str) -> NaiveDate {
        s.parse().expect("fixture date")
    }
}

/// Fixture for the sample ledger
pub struct LedgerFixtures;

impl LedgerFixtures {
    /// Builds the canonical dataset
    ///
    /// Fifteen transactions across April and May 2024. Vendor totals:
    /// VENDOR ABC 1,540,000 / VENDOR XYZ 1,130,000 by default; see
    /// [`LedgerFixtures::heavy_vendor_dataset`] for totals that cross the
    /// TDS thresholds.
    pub fn sample_dataset() -> SampleDataset {
        let rows: [(&str, &str, u64, TransactionType, KycStatus); 15] = [
            ("2024-04-15", "MR KALAI", 75_000, TransactionType::Credit, KycStatus::Pending),
            ("2024-04-18", "SURESH ENTERPRISES", 150_000, TransactionType::Credit, KycStatus::Completed),
            ("2024-04-20", "KUMAR SERVICES", 45_000, TransactionType::Credit, KycStatus::NotApplicable),
            ("2024-04-22", "VENDOR ABC", 280_000, TransactionType::Debit, KycStatus::NotApplicable),
            ("2024-04-25", "RAJESH TRADING", 95_000, TransactionType::Credit, KycStatus::Pending),
            ("2024-04-28", "VENDOR ABC", 520_000, TransactionType::Debit, KycStatus::NotApplicable),
            ("2024-05-02", "PRIYA SOLUTIONS", 125_000, TransactionType::Credit, KycStatus::Completed),
            ("2024-05-05", "VENDOR XYZ", 450_000, TransactionType::Debit, KycStatus::NotApplicable),
            ("2024-05-08", "ARUN INDUSTRIES", 85_000, TransactionType::Credit, KycStatus::Pending),
            ("2024-05-10", "VENDOR ABC", 320_000, TransactionType::Debit, KycStatus::NotApplicable),
            ("2024-05-12", "DEEPA CONSULTANTS", 60_000, TransactionType::Credit, KycStatus::Completed),
            ("2024-05-15", "VENDOR XYZ", 680_000, TransactionType::Debit, KycStatus::NotApplicable),
            ("2024-05-18", "MR KALAI", 55_000, TransactionType::Credit, KycStatus::Pending),
            ("2024-05-20", "TECH SOLUTIONS PVT", 250_000, TransactionType::Credit, KycStatus::Pending),
            ("2024-05-22", "VENDOR ABC", 420_000, TransactionType::Debit, KycStatus::NotApplicable),
        ];

        let mut transactions: Vec<Transaction> = rows
            .iter()
            .enumerate()
            .map(|(i, (date, sender, amount, transaction_type, status))| {
                let mut t = Transaction::new(
                    DateFixtures::date(date),
                    *sender,
                    format!("NEFT/{sender}/FIXTURE"),
                    Amount::rupees(*amount),
                    *transaction_type,
                );
                t.id = IdFixtures::transaction_id(i as u32 + 1);
                t.kyc_status = *status;
                t
            })
            .collect();

        let kyc_records = vec![
            KycRecord {
                id: IdFixtures::kyc_id(1),
                name: "SURESH ENTERPRISES".to_string(),
                pan: "ABCDE1234F".to_string(),
                aadhaar_last4: "5678".to_string(),
                gst: None,
                notes: Some("Regular client, verified documents".to_string()),
                updated_at: DateFixtures::date("2024-04-18"),
                linked_transactions: vec![transactions[1].id],
            },
            KycRecord {
                id: IdFixtures::kyc_id(2),
                name: "PRIYA SOLUTIONS".to_string(),
                pan: "FGHIJ5678K".to_string(),
                aadhaar_last4: "9012".to_string(),
                gst: None,
                notes: Some("Consulting services provider".to_string()),
                updated_at: DateFixtures::date("2024-05-02"),
                linked_transactions: vec![transactions[6].id],
            },
            KycRecord {
                id: IdFixtures::kyc_id(3),
                name: "DEEPA CONSULTANTS".to_string(),
                pan: "KLMNO9012P".to_string(),
                aadhaar_last4: "3456".to_string(),
                gst: None,
                notes: None,
                updated_at: DateFixtures::date("2024-05-12"),
                linked_transactions: vec![transactions[10].id],
            },
        ];

        let bills = vec![
            Bill::for_transaction(
                &transactions[1],
                BillNumber::new(2024, 1),
                Some("Consulting services rendered".to_string()),
            ),
            Bill::for_transaction(
                &transactions[6],
                BillNumber::new(2024, 2),
                Some("Project milestone payment".to_string()),
            ),
        ];
        transactions[1].bill_id = Some(bills[0].bill_number);
        transactions[6].bill_id = Some(bills[1].bill_number);

        SampleDataset {
            transactions,
            kyc_records,
            bills,
            next_serial: 3,
        }
    }

    /// A small debit-only ledger whose vendor totals straddle the TDS bands
    ///
    /// VENDOR ABC lands at 5,200,000 (required), VENDOR XYZ at 4,500,000
    /// (nearing), SUPPLIES CO at 2,300,000 (under).
    pub fn heavy_vendor_dataset() -> Vec<Transaction> {
        let rows: [(&str, &str, u64); 6] = [
            ("2024-04-22", "VENDOR ABC", 2_800_000),
            ("2024-04-28", "VENDOR ABC", 1_200_000),
            ("2024-05-05", "VENDOR XYZ", 4_500_000),
            ("2024-05-10", "VENDOR ABC", 1_200_000),
            ("2024-05-12", "SUPPLIES CO", 2_300_000),
            ("2024-05-15", "VENDOR ABC", 0),
        ];
        rows.iter()
            .map(|(date, sender, amount)| {
                Transaction::new(
                    DateFixtures::date(date),
                    *sender,
                    format!("RTGS/{sender}/FIXTURE"),
                    Amount::rupees(*amount),
                    TransactionType::Debit,
                )
            })
            .collect()
    }
}

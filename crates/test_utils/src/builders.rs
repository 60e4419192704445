//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. These builders allow tests to specify only the relevant fields
//! while using defaults for everything else.

use chrono::NaiveDate;

use core_kernel::{Amount, BillNumber, KycId, TransactionId};
use domain_billing::Bill;
use domain_kyc::KycRecord;
use domain_ledger::{KycStatus, Transaction, TransactionType};

use crate::fixtures::DateFixtures;

/// Builder for constructing test transactions
pub struct TransactionBuilder {
    id: TransactionId,
    date: NaiveDate,
    sender: String,
    particulars: String,
    amount: Amount,
    transaction_type: TransactionType,
    kyc_status: KycStatus,
    bill_id: Option<BillNumber>,
}

impl Default for TransactionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionBuilder {
    /// Creates a builder for a mid-size pending credit
    pub fn new() -> Self {
        Self {
            id: TransactionId::new(),
            date: DateFixtures::date("2024-04-15"),
            sender: "MR KALAI".to_string(),
            particulars: "UPI/CR/408552127716/MR KALAI/PAYTM".to_string(),
            amount: Amount::rupees(75_000),
            transaction_type: TransactionType::Credit,
            kyc_status: KycStatus::Pending,
            bill_id: None,
        }
    }

    /// Creates a builder for a vendor debit
    pub fn debit() -> Self {
        Self {
            sender: "VENDOR ABC".to_string(),
            particulars: "NEFT/VENDOR ABC/SUPPLIES".to_string(),
            amount: Amount::rupees(280_000),
            transaction_type: TransactionType::Debit,
            kyc_status: KycStatus::NotApplicable,
            ..Self::new()
        }
    }

    pub fn with_id(mut self, id: TransactionId) -> Self {
        self.id = id;
        self
    }

    pub fn with_date(mut self, date: impl AsRef<str>) -> Self {
        self.date = DateFixtures::date(date.as_ref());
        self
    }

    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = sender.into();
        self
    }

    pub fn with_particulars(mut self, particulars: impl Into<String>) -> Self {
        self.particulars = particulars.into();
        self
    }

    pub fn with_amount(mut self, rupees: u64) -> Self {
        self.amount = Amount::rupees(rupees);
        self
    }

    pub fn with_kyc_status(mut self, status: KycStatus) -> Self {
        self.kyc_status = status;
        self
    }

    pub fn with_bill(mut self, number: BillNumber) -> Self {
        self.bill_id = Some(number);
        self
    }

    /// Builds the transaction
    pub fn build(self) -> Transaction {
        let mut transaction = Transaction::new(
            self.date,
            self.sender,
            self.particulars,
            self.amount,
            self.transaction_type,
        );
        transaction.id = self.id;
        transaction.kyc_status = self.kyc_status;
        transaction.bill_id = self.bill_id;
        transaction
    }
}

/// Builder for constructing test KYC records
pub struct KycRecordBuilder {
    name: String,
    pan: String,
    aadhaar_last4: String,
    gst: Option<String>,
    notes: Option<String>,
    updated_at: NaiveDate,
    linked_transactions: Vec<TransactionId>,
}

impl Default for KycRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl KycRecordBuilder {
    /// Creates a builder with a complete document set
    pub fn new() -> Self {
        Self {
            name: "SURESH ENTERPRISES".to_string(),
            pan: "ABCDE1234F".to_string(),
            aadhaar_last4: "5678".to_string(),
            gst: None,
            notes: None,
            updated_at: DateFixtures::date("2024-04-18"),
            linked_transactions: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_pan(mut self, pan: impl Into<String>) -> Self {
        self.pan = pan.into();
        self
    }

    pub fn with_aadhaar_last4(mut self, aadhaar_last4: impl Into<String>) -> Self {
        self.aadhaar_last4 = aadhaar_last4.into();
        self
    }

    pub fn with_gst(mut self, gst: impl Into<String>) -> Self {
        self.gst = Some(gst.into());
        self
    }

    pub fn with_linked(mut self, id: TransactionId) -> Self {
        self.linked_transactions.push(id);
        self
    }

    /// Builds the record
    pub fn build(self) -> KycRecord {
        KycRecord {
            id: KycId::new_v7(),
            name: self.name,
            pan: self.pan,
            aadhaar_last4: self.aadhaar_last4,
            gst: self.gst,
            notes: self.notes,
            updated_at: self.updated_at,
            linked_transactions: self.linked_transactions,
        }
    }
}

/// Builder for constructing test bills
pub struct BillBuilder {
    number: BillNumber,
    notes: Option<String>,
}

impl Default for BillBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BillBuilder {
    pub fn new() -> Self {
        Self {
            number: BillNumber::new(2024, 1),
            notes: None,
        }
    }

    pub fn with_number(mut self, year: i32, sequence: u32) -> Self {
        self.number = BillNumber::new(year, sequence);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Snapshots the given transaction under the configured number
    pub fn build_for(self, transaction: &Transaction) -> Bill {
        Bill::for_transaction(transaction, self.number, self.notes)
    }
}

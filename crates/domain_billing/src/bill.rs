//! Bill entity
//!
//! A bill is a numbered snapshot of one credit transaction, taken at
//! generation time. Customer, amount, and date are copies, not live
//! references; later edits to the transaction do not flow into its bill.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use core_kernel::{Amount, BillNumber, TransactionId};
use domain_ledger::Transaction;

/// A generated bill
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bill {
    /// Human-readable bill identifier, `<year>-<sequence>`
    #[serde(rename = "billId")]
    pub bill_number: BillNumber,
    /// Customer name, copied from the transaction's sender
    pub customer: String,
    /// Amount, copied from the transaction
    pub amount: Amount,
    /// Value date, copied from the transaction
    pub date: NaiveDate,
    /// The one transaction this bill was generated for
    #[serde(rename = "transactionId")]
    pub transaction_id: TransactionId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Path to the rendered document
    #[serde(rename = "pdfUrl")]
    pub pdf_url: String,
}

impl Bill {
    /// Snapshots a transaction into a bill under the given number
    pub fn for_transaction(
        transaction: &Transaction,
        bill_number: BillNumber,
        notes: Option<String>,
    ) -> Self {
        Self {
            bill_number,
            customer: transaction.sender.clone(),
            amount: transaction.amount,
            date: transaction.date,
            transaction_id: transaction.id,
            notes: notes.filter(|n| !n.trim().is_empty()),
            pdf_url: format!("/bills/{bill_number}.pdf"),
        }
    }

    /// Returns true if the bill's date falls in the given calendar month
    pub fn in_month(&self, year: i32, month: u32) -> bool {
        self.date.year() == year && self.date.month() == month
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_ledger::TransactionType;

    fn transaction() -> Transaction {
        Transaction::new(
            "2024-04-18".parse().unwrap(),
            "SURESH ENTERPRISES",
            "NEFT/SURESH ENTERPRISES/INV 1234",
            Amount::rupees(150_000),
            TransactionType::Credit,
        )
    }

    #[test]
    fn test_bill_snapshots_transaction_fields() {
        let t = transaction();
        let bill = Bill::for_transaction(&t, BillNumber::new(2024, 1), Some("Consulting".into()));

        assert_eq!(bill.customer, "SURESH ENTERPRISES");
        assert_eq!(bill.amount, Amount::rupees(150_000));
        assert_eq!(bill.date, t.date);
        assert_eq!(bill.transaction_id, t.id);
        assert_eq!(bill.pdf_url, "/bills/2024-0001.pdf");
    }

    #[test]
    fn test_blank_notes_are_dropped() {
        let t = transaction();
        let bill = Bill::for_transaction(&t, BillNumber::new(2024, 1), Some("   ".into()));
        assert!(bill.notes.is_none());
    }

    #[test]
    fn test_in_month() {
        let t = transaction();
        let bill = Bill::for_transaction(&t, BillNumber::new(2024, 1), None);
        assert!(bill.in_month(2024, 4));
        assert!(!bill.in_month(2024, 5));
        assert!(!bill.in_month(2023, 4));
    }

    #[test]
    fn test_wire_format_field_names() {
        let t = transaction();
        let bill = Bill::for_transaction(&t, BillNumber::new(2024, 1), None);
        let json = serde_json::to_value(&bill).unwrap();
        assert_eq!(json["billId"], "2024-0001");
        assert!(json.get("transactionId").is_some());
        assert!(json.get("pdfUrl").is_some());
        assert!(json.get("notes").is_none());
    }
}

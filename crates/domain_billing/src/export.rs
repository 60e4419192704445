//! Monthly bill export
//!
//! Renders a month's bills as a CSV document for the auditor download.
//! The column set matches the bill snapshot; an empty month produces a
//! header-only document rather than an error.

use crate::bill::Bill;
use crate::error::BillingError;

const HEADERS: [&str; 6] = [
    "billId",
    "customer",
    "amount",
    "date",
    "transactionId",
    "notes",
];

/// Serializes bills to CSV bytes
pub fn write_csv(bills: &[Bill]) -> Result<Vec<u8>, BillingError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(HEADERS)
        .map_err(|e| BillingError::Export(e.to_string()))?;

    for bill in bills {
        writer
            .write_record([
                bill.bill_number.to_string(),
                bill.customer.clone(),
                bill.amount.value().to_string(),
                bill.date.to_string(),
                bill.transaction_id.to_string(),
                bill.notes.clone().unwrap_or_default(),
            ])
            .map_err(|e| BillingError::Export(e.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|e| BillingError::Export(e.to_string()))
}

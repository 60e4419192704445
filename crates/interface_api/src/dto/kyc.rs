//! KYC request/response DTOs

use serde::{Deserialize, Serialize};

use core_kernel::TransactionId;
use domain_kyc::{IdentitySuggestions, SaveKycRequest};

/// Body for saving a KYC record
///
/// Matches the dashboard's save payload, where the linked ids travel as
/// `transactionIds`.
#[derive(Debug, Deserialize)]
pub struct SaveKycBody {
    pub name: String,
    #[serde(default)]
    pub pan: String,
    #[serde(rename = "aadhaarLast4", default)]
    pub aadhaar_last4: String,
    pub gst: Option<String>,
    pub notes: Option<String>,
    #[serde(rename = "transactionIds", default)]
    pub transaction_ids: Vec<TransactionId>,
}

impl From<SaveKycBody> for SaveKycRequest {
    fn from(body: SaveKycBody) -> Self {
        SaveKycRequest {
            name: body.name,
            pan: body.pan,
            aadhaar_last4: body.aadhaar_last4,
            gst: body.gst,
            notes: body.notes,
            linked_transactions: body.transaction_ids,
        }
    }
}

/// Query parameters for identity autocomplete
#[derive(Debug, Deserialize)]
pub struct AutocompleteParams {
    pub name: String,
}

/// One autocomplete suggestion on the wire
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SuggestionDto {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

/// Flattens grouped suggestions into the dashboard's `{type, value}` rows
pub fn flatten_suggestions(suggestions: IdentitySuggestions) -> Vec<SuggestionDto> {
    let mut rows = Vec::new();
    rows.extend(suggestions.pans.into_iter().map(|value| SuggestionDto {
        kind: "PAN".to_string(),
        value,
    }));
    rows.extend(suggestions.aadhaars.into_iter().map(|value| SuggestionDto {
        kind: "AADHAAR".to_string(),
        value,
    }));
    rows.extend(suggestions.gsts.into_iter().map(|value| SuggestionDto {
        kind: "GST".to_string(),
        value,
    }));
    rows
}

//! KYC save validation
//!
//! The hard requirement is narrow: a save must carry at least one identity
//! field. Document-format checks are advisory only, because statement
//! counterparties routinely submit partial or legacy identifiers and the
//! operator is the final judge; those surface as warnings.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::record::SaveKycRequest;

static PAN_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("invalid PAN pattern"));

static AADHAAR_LAST4_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}$").expect("invalid Aadhaar pattern"));

static GST_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][0-9A-Z]{3}$").expect("invalid GST pattern")
});

/// Result of validating a KYC save
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the save may proceed
    pub is_valid: bool,
    /// Blocking problems
    pub errors: Vec<String>,
    /// Non-fatal issues worth logging
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Creates a successful validation result
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }

    /// Adds a warning to the result
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// Validator for KYC save requests
pub struct KycValidator;

impl KycValidator {
    /// Validates a save request
    ///
    /// The only blocking rule is the identity-field invariant: at least one
    /// of PAN, Aadhaar last-4, or GST must be non-empty.
    pub fn validate(request: &SaveKycRequest) -> ValidationResult {
        let mut result = ValidationResult::ok();

        let pan = request.pan.trim();
        let aadhaar = request.aadhaar_last4.trim();
        let gst = request.gst.as_deref().map(str::trim).unwrap_or("");

        if pan.is_empty() && aadhaar.is_empty() && gst.is_empty() {
            result.add_error("missing identity field");
            return result;
        }

        if request.name.trim().is_empty() {
            result.add_warning("customer name is empty");
        }
        if !pan.is_empty() && !PAN_FORMAT.is_match(pan) {
            result.add_warning(format!("PAN does not match the expected format: {pan}"));
        }
        if !aadhaar.is_empty() && !AADHAAR_LAST4_FORMAT.is_match(aadhaar) {
            result.add_warning(format!(
                "Aadhaar fragment should be the last four digits: {aadhaar}"
            ));
        }
        if !gst.is_empty() && !GST_FORMAT.is_match(gst) {
            result.add_warning(format!("GST does not match the expected format: {gst}"));
        }
        if request.linked_transactions.is_empty() {
            result.add_warning("no transactions linked to this record");
        }

        result
    }
}

//! Settings DTOs
//!
//! The dashboard treats the serial as an opaque string in a text field, so
//! the wire carries it as a string both ways; the domain stores a number.

use serde::{Deserialize, Serialize};

use domain_billing::BillingSettings;

use crate::error::ApiError;

/// Settings as the dashboard reads them
#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    #[serde(rename = "lastSerial")]
    pub last_serial: String,
}

impl From<BillingSettings> for SettingsResponse {
    fn from(settings: BillingSettings) -> Self {
        Self {
            last_serial: settings.last_serial.to_string(),
        }
    }
}

/// Query parameters for the save-settings call
#[derive(Debug, Deserialize)]
pub struct SaveSettingsParams {
    #[serde(rename = "lastSerial")]
    pub last_serial: String,
}

impl SaveSettingsParams {
    /// Parses the wire string into settings
    pub fn into_settings(self) -> Result<BillingSettings, ApiError> {
        let last_serial: u32 = self
            .last_serial
            .trim()
            .parse()
            .map_err(|_| ApiError::BadRequest(format!("invalid lastSerial: {}", self.last_serial)))?;
        Ok(BillingSettings { last_serial })
    }
}

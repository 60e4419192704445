//! KYC Domain
//!
//! Identity verification for large incoming credits. The crate owns the
//! record entity, the pure classification rules, save validation, and the
//! service that ties record saves to status advancement on the ledger.
//!
//! The review threshold is a fixed constant: credits of fifty thousand
//! rupees or more require verification, everything else (and every debit)
//! does not.

pub mod record;
pub mod classifier;
pub mod validation;
pub mod service;
pub mod ports;
pub mod error;

pub use record::{KycRecord, SaveKycRequest};
pub use classifier::{classify, review_threshold, KYC_REVIEW_THRESHOLD_RUPEES};
pub use validation::{KycValidator, ValidationResult};
pub use service::{KycService, IdentitySuggestions};
pub use ports::{KycPort, MemoryKycStore};
pub use error::KycError;

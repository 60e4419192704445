//! Strongly-typed identifiers for domain entities
//!
//! Using newtype wrappers around UUIDs provides type safety and prevents
//! accidental mixing of different identifier types. Bill identifiers are the
//! exception: they are human-readable sequence numbers, modeled separately
//! as [`BillNumber`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates a new time-ordered identifier (v7)
            pub fn new_v7() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates from an existing UUID
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Returns the identifier prefix for display
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Strip prefix if present
                let uuid_str = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                Ok(Self(Uuid::parse_str(uuid_str)?))
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

// Ledger domain identifiers
define_id!(TransactionId, "TXN");

// KYC domain identifiers
define_id!(KycId, "KYC");

/// Errors parsing a bill number
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BillNumberError {
    #[error("Invalid bill number format: {0}")]
    InvalidFormat(String),
}

/// A human-readable bill identifier, `<year>-<4-digit sequence>`
///
/// The year is the calendar year of the billed transaction's date. The
/// sequence is shared across all years, so numbers within one year are not
/// necessarily contiguous when bills for several years interleave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BillNumber {
    year: i32,
    sequence: u32,
}

impl BillNumber {
    /// Creates a bill number from its parts
    pub fn new(year: i32, sequence: u32) -> Self {
        Self { year, sequence }
    }

    /// The calendar year component
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The shared-sequence component
    pub fn sequence(&self) -> u32 {
        self.sequence
    }
}

impl fmt::Display for BillNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:04}", self.year, self.sequence)
    }
}

impl FromStr for BillNumber {
    type Err = BillNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, seq) = s
            .split_once('-')
            .ok_or_else(|| BillNumberError::InvalidFormat(s.to_string()))?;
        let year: i32 = year
            .parse()
            .map_err(|_| BillNumberError::InvalidFormat(s.to_string()))?;
        if seq.len() < 4 {
            return Err(BillNumberError::InvalidFormat(s.to_string()));
        }
        let sequence: u32 = seq
            .parse()
            .map_err(|_| BillNumberError::InvalidFormat(s.to_string()))?;
        Ok(Self { year, sequence })
    }
}

impl TryFrom<String> for BillNumber {
    type Error = BillNumberError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BillNumber> for String {
    fn from(number: BillNumber) -> String {
        number.to_string()
    }
}

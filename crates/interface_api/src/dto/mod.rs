//! Request/Response data transfer objects
//!
//! Field names stay camelCase on the wire for compatibility with the
//! dashboard's payloads.

pub mod transactions;
pub mod kyc;
pub mod bills;
pub mod settings;

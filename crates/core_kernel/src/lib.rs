//! Core Kernel - Foundational types and utilities for the bookkeeping system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Amount type with precise decimal arithmetic
//! - Common identifiers and the bill-number value object
//! - Ports infrastructure shared by the domain stores

pub mod money;
pub mod identifiers;
pub mod error;
pub mod ports;

pub use money::{Amount, AmountError};
pub use identifiers::{TransactionId, KycId, BillNumber, BillNumberError};
pub use error::CoreError;
pub use ports::{
    PortError, DomainPort, OperationMetadata,
    AdapterHealth, HealthCheckResult, HealthCheckable,
};

//! Request handlers, one module per domain

pub mod health;
pub mod transactions;
pub mod kyc;
pub mod tds;
pub mod bills;
pub mod reports;
pub mod settings;

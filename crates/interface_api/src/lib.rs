//! HTTP API Layer
//!
//! This crate provides the REST API for the bookkeeping core using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for each domain
//! - **DTOs**: Request/Response data transfer objects, camelCase on the wire
//! - **Error Handling**: Consistent JSON error responses
//!
//! State lives in the in-memory stores owned by [`AppState`]; every route
//! reads through the domain ports and services, never the stores directly.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState, config::ApiConfig};
//!
//! let app = create_router(AppState::in_memory(ApiConfig::default()));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_billing::{
    BillPort, BillingService, MemoryBillStore, MemorySettingsStore, SettingsPort,
};
use domain_kyc::{KycPort, KycService, MemoryKycStore};
use domain_ledger::{MemoryTransactionStore, TransactionPort};

use crate::config::ApiConfig;
use crate::handlers::{bills, health, kyc, reports, settings, tds, transactions};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub ledger: Arc<dyn TransactionPort>,
    pub kyc_records: Arc<dyn KycPort>,
    pub bills: Arc<dyn BillPort>,
    pub settings: Arc<dyn SettingsPort>,
    pub kyc: Arc<KycService>,
    pub billing: Arc<BillingService>,
}

impl AppState {
    /// Wires the in-memory stores and services
    pub fn in_memory(config: ApiConfig) -> Self {
        let ledger: Arc<dyn TransactionPort> = Arc::new(MemoryTransactionStore::new());
        let kyc_records: Arc<dyn KycPort> = Arc::new(MemoryKycStore::new());
        let bills: Arc<dyn BillPort> = Arc::new(MemoryBillStore::new());
        let settings: Arc<dyn SettingsPort> = Arc::new(MemorySettingsStore::new());

        let kyc = Arc::new(KycService::new(kyc_records.clone(), ledger.clone()));
        let billing = Arc::new(BillingService::new(
            bills.clone(),
            settings.clone(),
            ledger.clone(),
        ));

        Self {
            config,
            ledger,
            kyc_records,
            bills,
            settings,
            kyc,
            billing,
        }
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Shared application state
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Public routes (no /api prefix)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Routes mirror the dashboard's API client
    let api_routes = Router::new()
        .route(
            "/transactions",
            get(transactions::list).post(transactions::create),
        )
        .route(
            "/transactions/:id",
            put(transactions::update).delete(transactions::delete),
        )
        .route("/kyc", get(kyc::list).post(kyc::save))
        .route("/kyc/autocomplete", get(kyc::autocomplete))
        .route("/tds/summary", get(tds::summary))
        .route("/bills", get(bills::list))
        .route("/bills/generate", post(bills::generate))
        .route("/bills/cleanup", delete(bills::cleanup))
        .route("/auditor/bills/download", get(bills::download))
        .route("/reports/monthly", get(reports::monthly))
        .route("/settings", get(settings::get_settings))
        .route("/saveSettings", post(settings::save_settings));

    Router::new()
        .merge(public_routes)
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}

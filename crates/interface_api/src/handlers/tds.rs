//! TDS handlers

use axum::extract::State;
use axum::Json;

use domain_ledger::TransactionQuery;
use domain_tds::VendorSummary;

use crate::error::ApiError;
use crate::AppState;

/// Aggregates vendor payments against the withholding thresholds
///
/// Recomputed from the full transaction list on every call; store order
/// drives the first-encounter grouping.
pub async fn summary(State(state): State<AppState>) -> Result<Json<Vec<VendorSummary>>, ApiError> {
    let transactions = state.ledger.list(TransactionQuery::default(), None).await?;
    Ok(Json(domain_tds::aggregate(&transactions)))
}

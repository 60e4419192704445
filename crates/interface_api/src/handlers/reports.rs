//! Reporting handlers

use axum::extract::State;
use axum::Json;

use domain_ledger::{monthly_flows, MonthlyFlow, TransactionQuery};

use crate::error::ApiError;
use crate::AppState;

/// Monthly credit/debit totals for the dashboard chart
pub async fn monthly(State(state): State<AppState>) -> Result<Json<Vec<MonthlyFlow>>, ApiError> {
    let transactions = state.ledger.list(TransactionQuery::default(), None).await?;
    Ok(Json(monthly_flows(&transactions)))
}

//! Billing handlers

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;

use domain_billing::Bill;

use crate::dto::bills::{CleanupResponse, GenerateBillBody, MonthParams};
use crate::error::ApiError;
use crate::AppState;

/// Lists all bills
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Bill>>, ApiError> {
    Ok(Json(state.billing.list().await?))
}

/// Generates a bill for one transaction
pub async fn generate(
    State(state): State<AppState>,
    Json(body): Json<GenerateBillBody>,
) -> Result<Json<Bill>, ApiError> {
    let bill = state.billing.generate(body.transaction_id, body.notes).await?;
    Ok(Json(bill))
}

/// Downloads one month's bills as a CSV document
pub async fn download(
    State(state): State<AppState>,
    Query(params): Query<MonthParams>,
) -> Result<impl IntoResponse, ApiError> {
    let params = params.validate()?;
    let document = state.billing.export_month(params.year, params.month).await?;

    let filename = format!("bills-{}-{:02}.csv", params.year, params.month);
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        document,
    ))
}

/// Deletes one month's bills
pub async fn cleanup(
    State(state): State<AppState>,
    Query(params): Query<MonthParams>,
) -> Result<Json<CleanupResponse>, ApiError> {
    let params = params.validate()?;
    let removed = state.billing.purge_month(params.year, params.month).await?;
    Ok(Json(CleanupResponse { removed }))
}

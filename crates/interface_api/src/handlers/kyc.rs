//! KYC handlers

use axum::extract::{Query, State};
use axum::Json;

use domain_kyc::KycRecord;

use crate::dto::kyc::{flatten_suggestions, AutocompleteParams, SaveKycBody, SuggestionDto};
use crate::error::ApiError;
use crate::AppState;

/// Lists all saved KYC records
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<KycRecord>>, ApiError> {
    Ok(Json(state.kyc.list().await?))
}

/// Saves a KYC record and advances the linked transactions
pub async fn save(
    State(state): State<AppState>,
    Json(body): Json<SaveKycBody>,
) -> Result<Json<KycRecord>, ApiError> {
    let record = state.kyc.save(body.into()).await?;
    Ok(Json(record))
}

/// Returns previously seen identity values for a customer name
pub async fn autocomplete(
    State(state): State<AppState>,
    Query(params): Query<AutocompleteParams>,
) -> Result<Json<Vec<SuggestionDto>>, ApiError> {
    let suggestions = state.kyc.suggestions(&params.name).await?;
    Ok(Json(flatten_suggestions(suggestions)))
}

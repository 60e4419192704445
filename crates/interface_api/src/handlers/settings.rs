//! Settings handlers
//!
//! The save endpoint takes its value as a query parameter, matching the
//! dashboard's `saveSettings?lastSerial=` call.

use axum::extract::{Query, State};
use axum::Json;

use crate::dto::settings::{SaveSettingsParams, SettingsResponse};
use crate::error::ApiError;
use crate::AppState;

/// Reads the billing settings
pub async fn get_settings(
    State(state): State<AppState>,
) -> Result<Json<SettingsResponse>, ApiError> {
    let settings = state.billing.settings().await?;
    Ok(Json(settings.into()))
}

/// Overwrites the billing settings
pub async fn save_settings(
    State(state): State<AppState>,
    Query(params): Query<SaveSettingsParams>,
) -> Result<Json<SettingsResponse>, ApiError> {
    let settings = params.into_settings()?;
    state.billing.save_settings(settings).await?;
    Ok(Json(settings.into()))
}

//! Transaction handlers

use axum::extract::{Path, Query, State};
use axum::Json;

use core_kernel::TransactionId;
use domain_ledger::Transaction;

use crate::dto::transactions::{
    CreateTransactionRequest, ListTransactionsParams, UpdateTransactionBody,
};
use crate::error::ApiError;
use crate::AppState;

/// Lists transactions with the dashboard's filters
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListTransactionsParams>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    let query = params.into_query()?;
    let transactions = state.ledger.list(query, None).await?;
    Ok(Json(transactions))
}

/// Creates a transaction, classifying its KYC status at ingest
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateTransactionRequest>,
) -> Result<Json<Transaction>, ApiError> {
    let mut transaction = request.into_transaction();
    transaction.kyc_status = state.kyc.classify(&transaction).await?;

    let created = state.ledger.create(transaction, None).await?;
    tracing::info!(
        id = %created.id,
        sender = %created.sender,
        kyc_status = ?created.kyc_status,
        "transaction created"
    );
    Ok(Json(created))
}

/// Updates a transaction's statement fields
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<TransactionId>,
    Json(body): Json<UpdateTransactionBody>,
) -> Result<Json<Transaction>, ApiError> {
    let updated = state.ledger.update(id, body.into(), None).await?;
    Ok(Json(updated))
}

/// Deletes a transaction
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<TransactionId>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.ledger.delete(id, None).await?;
    Ok(Json(serde_json::json!({ "deleted": id })))
}

//! Transactions API endpoints

use api_types::transaction::{
    TransactionCategory, TransactionCreated, TransactionListResponse, TransactionNew,
    TransactionResponse, TransactionUpdate, TransactionView,
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::Utc;
use uuid::Uuid;

use crate::{
    ServerError,
    categories::{map_kind, unmap_kind},
    server::ServerState,
};

fn map_transaction(tx: engine::TransactionWithCategory) -> TransactionView {
    let engine::TransactionWithCategory {
        transaction,
        category,
    } = tx;
    TransactionView {
        id: transaction.id,
        amount_minor: transaction.amount_minor,
        description: transaction.description,
        kind: map_kind(transaction.kind),
        user_id: transaction.user_id,
        date: transaction.date.fixed_offset(),
        category: TransactionCategory {
            id: category.id,
            title: category.title,
        },
        created_at: transaction.created_at.fixed_offset(),
    }
}

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<TransactionNew>, JsonRejection>,
) -> Result<(StatusCode, Json<TransactionCreated>), ServerError> {
    let Json(payload) = payload?;
    let transaction_id = state
        .engine
        .create_transaction(engine::CreateTransactionCmd {
            amount_minor: payload.amount_minor,
            description: payload.description,
            date: payload.date.with_timezone(&Utc),
            user_id: payload.user_id,
            category_id: payload.category_id,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(TransactionCreated { transaction_id }),
    ))
}

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<TransactionListResponse>, ServerError> {
    let transactions = state
        .engine
        .list_transactions()
        .await?
        .into_iter()
        .map(map_transaction)
        .collect();

    Ok(Json(TransactionListResponse { transactions }))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(transaction_id): Path<Uuid>,
) -> Result<Json<TransactionResponse>, ServerError> {
    let tx = state.engine.transaction(transaction_id).await?;
    Ok(Json(TransactionResponse {
        transaction: map_transaction(tx),
    }))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(transaction_id): Path<Uuid>,
    payload: Result<Json<TransactionUpdate>, JsonRejection>,
) -> Result<StatusCode, ServerError> {
    let Json(payload) = payload?;
    state
        .engine
        .update_transaction(engine::UpdateTransactionCmd {
            transaction_id,
            amount_minor: payload.amount_minor,
            description: payload.description,
            category_id: payload.category_id,
            user_id: payload.user_id,
            kind: payload.kind.map(unmap_kind),
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(transaction_id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_transaction(transaction_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

//! Budget items API endpoints, including reconciliation.

use api_types::budget_item::{
    BudgetItemCategory, BudgetItemCreated, BudgetItemListResponse, BudgetItemNew, BudgetItemView,
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{ServerError, categories::map_kind, server::ServerState};

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<BudgetItemNew>, JsonRejection>,
) -> Result<(StatusCode, Json<BudgetItemCreated>), ServerError> {
    let Json(payload) = payload?;
    let budget_item_id = state
        .engine
        .create_budget_item(engine::CreateBudgetItemCmd {
            planned_minor: payload.planned_minor,
            user_id: payload.user_id,
            category_id: payload.category_id,
            budget_id: payload.budget_id,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BudgetItemCreated { budget_item_id }),
    ))
}

pub async fn list(
    State(state): State<ServerState>,
    Path(budget_id): Path<Uuid>,
) -> Result<Json<BudgetItemListResponse>, ServerError> {
    let budget_items = state
        .engine
        .budget_items(budget_id)
        .await?
        .into_iter()
        .map(|item| BudgetItemView {
            id: item.id,
            budget_id: item.budget_id,
            planned_minor: item.planned_minor,
            actual_minor: item.actual_minor,
            category: BudgetItemCategory {
                id: item.category.id,
                title: item.category.title,
                kind: map_kind(item.category.kind),
            },
        })
        .collect();

    Ok(Json(BudgetItemListResponse { budget_items }))
}

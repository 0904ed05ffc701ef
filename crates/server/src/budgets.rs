//! Budgets API endpoints

use api_types::budget::{BudgetCreated, BudgetNew, BudgetResponse, BudgetView};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::Utc;
use uuid::Uuid;

use crate::{ServerError, server::ServerState};

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<BudgetNew>, JsonRejection>,
) -> Result<(StatusCode, Json<BudgetCreated>), ServerError> {
    let Json(payload) = payload?;
    let items = payload
        .budget_items
        .into_iter()
        .map(|item| engine::BudgetItemInput::new(item.planned_minor, item.category_id))
        .collect();

    let budget_id = state
        .engine
        .create_budget(engine::CreateBudgetCmd {
            name: payload.name,
            start_date: payload.start_date.with_timezone(&Utc),
            end_date: payload.end_date.with_timezone(&Utc),
            user_id: payload.user_id,
            items,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(BudgetCreated { budget_id })))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(budget_id): Path<Uuid>,
) -> Result<Json<BudgetResponse>, ServerError> {
    let budget = state.engine.budget(budget_id).await?;
    Ok(Json(BudgetResponse {
        budget: BudgetView {
            id: budget.id,
            name: budget.name,
            start_date: budget.start_date.fixed_offset(),
            end_date: budget.end_date.fixed_offset(),
        },
    }))
}

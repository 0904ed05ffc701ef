//! Categories API endpoints.

use api_types::category::{CategoryListResponse, CategoryView};
use axum::{Json, extract::State};

use crate::{ServerError, server::ServerState};

pub(crate) fn map_kind(kind: engine::CategoryKind) -> api_types::CategoryKind {
    match kind {
        engine::CategoryKind::Expense => api_types::CategoryKind::Expense,
        engine::CategoryKind::Income => api_types::CategoryKind::Income,
    }
}

pub(crate) fn unmap_kind(kind: api_types::CategoryKind) -> engine::CategoryKind {
    match kind {
        api_types::CategoryKind::Expense => engine::CategoryKind::Expense,
        api_types::CategoryKind::Income => engine::CategoryKind::Income,
    }
}

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<CategoryListResponse>, ServerError> {
    let categories = state
        .engine
        .categories()
        .await?
        .into_iter()
        .map(|category| CategoryView {
            id: category.id,
            title: category.title,
            kind: map_kind(category.kind),
        })
        .collect();

    Ok(Json(CategoryListResponse { categories }))
}

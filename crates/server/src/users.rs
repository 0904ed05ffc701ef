//! Users API endpoints

use api_types::user::{UserListResponse, UserResponse, UserView};
use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::{ServerError, server::ServerState};

fn map_user(user: engine::User) -> UserView {
    UserView {
        id: user.id,
        name: user.name,
        email: user.email,
        avatar_url: user.avatar_url,
        created_at: user.created_at.fixed_offset(),
    }
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<UserListResponse>, ServerError> {
    let users = state
        .engine
        .users()
        .await?
        .into_iter()
        .map(map_user)
        .collect();
    Ok(Json(UserListResponse { users }))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserResponse>, ServerError> {
    let user = state.engine.user(user_id).await?;
    Ok(Json(UserResponse {
        user: map_user(user),
    }))
}

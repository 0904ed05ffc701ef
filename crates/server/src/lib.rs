use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::IntoResponse,
};
use engine::EngineError;

use serde::Serialize;
pub use server::{ServerState, router, run_with_listener};

mod budget_items;
mod budgets;
mod categories;
mod server;
mod transactions;
mod users;

pub enum ServerError {
    Engine(EngineError),
    /// The request body could not be read as the expected JSON.
    Body(JsonRejection),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        EngineError::ExistingKey(_) => StatusCode::CONFLICT,
        EngineError::Database(_) | EngineError::Password(_) => StatusCode::INTERNAL_SERVER_ERROR,
        EngineError::EmptyCollection(_)
        | EngineError::InvalidAmount(_)
        | EngineError::InvalidId(_)
        | EngineError::InvalidKind(_)
        | EngineError::InvalidName(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
        EngineError::Password(msg) => {
            tracing::error!("password error: {msg}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => {
                (status_for_engine_error(&err), message_for_engine_error(err))
            }
            ServerError::Body(rejection) => (rejection.status(), rejection.body_text()),
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

impl From<JsonRejection> for ServerError {
    fn from(value: JsonRejection) -> Self {
        Self::Body(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_not_found_maps_to_404() {
        let res = ServerError::from(EngineError::KeyNotFound("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn engine_empty_collection_maps_to_422() {
        let res =
            ServerError::from(EngineError::EmptyCollection("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn engine_conflict_maps_to_409() {
        let res = ServerError::from(EngineError::ExistingKey("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn engine_database_maps_to_500() {
        let err = EngineError::Database(sea_orm_err());
        let res = ServerError::from(err).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    fn sea_orm_err() -> sea_orm::DbErr {
        sea_orm::DbErr::Custom("boom".to_string())
    }
}

use axum::{
    Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Basic},
};

use std::sync::Arc;

use crate::{budget_items, budgets, categories, transactions, users};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

/// Basic auth: the username is the user's email.
///
/// The authenticated `engine::User` is stored in the request extensions.
async fn auth(
    auth_header: Option<TypedHeader<Authorization<Basic>>>,
    State(state): State<ServerState>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let Some(TypedHeader(auth_header)) = auth_header else {
        return Err(StatusCode::UNAUTHORIZED);
    };
    if auth_header.username().is_empty() || auth_header.password().is_empty() {
        return Err(StatusCode::UNAUTHORIZED);
    }

    let user = state
        .engine
        .authenticate(auth_header.username(), auth_header.password())
        .await
        .map_err(|err| {
            tracing::error!("authentication failed: {err}");
            StatusCode::UNAUTHORIZED
        })?
        .ok_or(StatusCode::UNAUTHORIZED)?;

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/users", get(users::list))
        .route("/users/{user_id}", get(users::get))
        .route("/categories", get(categories::list))
        .route(
            "/transactions",
            post(transactions::create).get(transactions::list),
        )
        .route(
            "/transactions/{transaction_id}",
            get(transactions::get)
                .patch(transactions::update)
                .put(transactions::update)
                .delete(transactions::remove),
        )
        .route("/budgets", post(budgets::create))
        .route("/budgets/{budget_id}", get(budgets::get))
        .route("/budget-items", post(budget_items::create))
        .route("/budget-items/{budget_id}", get(budget_items::list))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth))
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        engine: Arc::new(engine),
    };

    axum::serve(listener, router(state)).await
}

use sea_orm::{ConnectionTrait, prelude::*};
use uuid::Uuid;

use crate::{EngineError, ResultEngine, budgets, categories, transactions, users};

use super::Engine;

/// Generates a `require_*` lookup that loads a row by id or fails with
/// `KeyNotFound` naming the missing entity.
macro_rules! impl_require {
    ($require_fn:ident, $entity:path, $model:path, $err_msg:literal) => {
        pub(super) async fn $require_fn<C: ConnectionTrait>(
            db: &C,
            id: Uuid,
        ) -> ResultEngine<$model> {
            <$entity>::find_by_id(id.to_string())
                .one(db)
                .await?
                .ok_or_else(|| EngineError::KeyNotFound($err_msg.to_string()))
        }
    };
}

impl Engine {
    impl_require!(
        require_user,
        users::Entity,
        users::Model,
        "user does not exist"
    );

    impl_require!(
        require_budget,
        budgets::Entity,
        budgets::Model,
        "budget does not exist"
    );

    impl_require!(
        require_category,
        categories::Entity,
        categories::Model,
        "category does not exist"
    );

    impl_require!(
        require_transaction,
        transactions::Entity,
        transactions::Model,
        "transaction does not exist"
    );
}

use chrono::Utc;
use sea_orm::{ActiveValue, QueryFilter, QueryOrder, TransactionTrait, prelude::*};
use uuid::Uuid;

use crate::{
    EngineError, ResultEngine, User,
    password::{hash_password_blocking, verify_password_blocking},
    users,
    util::{normalize_optional_text, normalize_required_name},
};

use super::{Engine, with_tx};

impl Engine {
    /// Create a user with a hashed password. Emails are unique.
    pub async fn create_user(
        &self,
        name: Option<&str>,
        email: &str,
        password: &str,
        avatar_url: Option<&str>,
    ) -> ResultEngine<Uuid> {
        let email = normalize_required_name(email, "email")?.to_lowercase();
        let password_hash = hash_password_blocking(password.to_owned()).await?;

        with_tx!(self, |db_tx| {
            if users::Entity::find()
                .filter(users::Column::Email.eq(email.clone()))
                .one(&db_tx)
                .await?
                .is_some()
            {
                return Err(EngineError::ExistingKey(email));
            }

            let id = Uuid::new_v4();
            users::ActiveModel {
                id: ActiveValue::Set(id.to_string()),
                name: ActiveValue::Set(normalize_optional_text(name)),
                email: ActiveValue::Set(email.clone()),
                password_hash: ActiveValue::Set(password_hash),
                avatar_url: ActiveValue::Set(normalize_optional_text(avatar_url)),
                created_at: ActiveValue::Set(Utc::now()),
            }
            .insert(&db_tx)
            .await?;

            tracing::info!(user_id = %id, "created user");
            Ok(id)
        })
    }

    /// Return a user by id.
    pub async fn user(&self, user_id: Uuid) -> ResultEngine<User> {
        Self::require_user(&self.database, user_id).await?.try_into()
    }

    /// Return all users, newest first.
    pub async fn users(&self) -> ResultEngine<Vec<User>> {
        users::Entity::find()
            .order_by_desc(users::Column::CreatedAt)
            .all(&self.database)
            .await?
            .into_iter()
            .map(User::try_from)
            .collect()
    }

    /// Check credentials. Returns `None` for an unknown email or a wrong
    /// password.
    pub async fn authenticate(&self, email: &str, password: &str) -> ResultEngine<Option<User>> {
        let email = email.trim().to_lowercase();
        let Some(model) = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.database)
            .await?
        else {
            return Ok(None);
        };

        if !verify_password_blocking(password.to_owned(), model.password_hash.clone()).await? {
            return Ok(None);
        }
        Ok(Some(model.try_into()?))
    }
}

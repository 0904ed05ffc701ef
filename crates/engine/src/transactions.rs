//! Transaction primitives.
//!
//! A `Transaction` is a dated money event owned by a user and tagged with a
//! category. Its `kind` is a snapshot of the category kind taken when the
//! transaction was created; later category changes do not touch it.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    Category, CategoryKind, EngineError, UpdateTransactionCmd,
    util::{apply_optional_text_patch, parse_uuid},
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    /// Signed amount in minor units. The sign is stored as given.
    pub amount_minor: i64,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub user_id: Uuid,
    pub category_id: Uuid,
    pub kind: CategoryKind,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Merge a partial update into this transaction.
    ///
    /// Fields absent from the patch keep their current value. `kind` is only
    /// changed when the patch carries it explicitly, even if `category_id`
    /// moves to a category of a different kind.
    #[must_use]
    pub fn patched(self, patch: &UpdateTransactionCmd) -> Self {
        Self {
            amount_minor: patch.amount_minor.unwrap_or(self.amount_minor),
            description: apply_optional_text_patch(self.description, patch.description.as_deref()),
            category_id: patch.category_id.unwrap_or(self.category_id),
            user_id: patch.user_id.unwrap_or(self.user_id),
            kind: patch.kind.unwrap_or(self.kind),
            ..self
        }
    }
}

/// A transaction together with the category it points at.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionWithCategory {
    pub transaction: Transaction,
    pub category: Category,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub amount_minor: i64,
    pub description: Option<String>,
    pub date: DateTimeUtc,
    pub user_id: String,
    pub category_id: String,
    pub kind: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Category,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    User,
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Transaction> for ActiveModel {
    fn from(tx: &Transaction) -> Self {
        Self {
            id: ActiveValue::Set(tx.id.to_string()),
            amount_minor: ActiveValue::Set(tx.amount_minor),
            description: ActiveValue::Set(tx.description.clone()),
            date: ActiveValue::Set(tx.date),
            user_id: ActiveValue::Set(tx.user_id.to_string()),
            category_id: ActiveValue::Set(tx.category_id.to_string()),
            kind: ActiveValue::Set(tx.kind.as_str().to_string()),
            created_at: ActiveValue::Set(tx.created_at),
        }
    }
}

impl TryFrom<Model> for Transaction {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_uuid(&model.id, "transaction")?,
            amount_minor: model.amount_minor,
            description: model.description,
            date: model.date,
            user_id: parse_uuid(&model.user_id, "user")?,
            category_id: parse_uuid(&model.category_id, "category")?,
            kind: CategoryKind::try_from(model.kind.as_str())?,
            created_at: model.created_at,
        })
    }
}

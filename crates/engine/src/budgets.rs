//! A `Budget` is a planning period owned by a user. Its line items live in
//! [`budget_items`](super::budget_items).

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{EngineError, util::parse_uuid};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub id: Uuid,
    pub name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "budgets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub start_date: DateTimeUtc,
    pub end_date: DateTimeUtc,
    pub user_id: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::budget_items::Entity")]
    Items,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    User,
}

impl Related<super::budget_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Budget> for ActiveModel {
    fn from(budget: &Budget) -> Self {
        Self {
            id: ActiveValue::Set(budget.id.to_string()),
            name: ActiveValue::Set(budget.name.clone()),
            start_date: ActiveValue::Set(budget.start_date),
            end_date: ActiveValue::Set(budget.end_date),
            user_id: ActiveValue::Set(budget.user_id.to_string()),
            created_at: ActiveValue::Set(budget.created_at),
        }
    }
}

impl TryFrom<Model> for Budget {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_uuid(&model.id, "budget")?,
            name: model.name,
            start_date: model.start_date,
            end_date: model.end_date,
            user_id: parse_uuid(&model.user_id, "user")?,
            created_at: model.created_at,
        })
    }
}

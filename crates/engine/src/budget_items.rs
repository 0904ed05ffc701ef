//! Budget items: the per-category planned amount inside a budget.
//!
//! `actual_minor` is stored as `0` and never written back. The real value is
//! computed on every read by [`reconcile`](crate::reconcile).

use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Category, EngineError, util::parse_uuid};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetItem {
    pub id: Uuid,
    pub planned_minor: i64,
    pub actual_minor: i64,
    pub user_id: Uuid,
    pub category_id: Uuid,
    pub budget_id: Uuid,
}

impl BudgetItem {
    /// A fresh item, with nothing spent yet.
    pub fn new(planned_minor: i64, user_id: Uuid, category_id: Uuid, budget_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            planned_minor,
            actual_minor: 0,
            user_id,
            category_id,
            budget_id,
        }
    }
}

/// A budget item after reconciliation, with its category resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciledItem {
    pub id: Uuid,
    pub budget_id: Uuid,
    pub planned_minor: i64,
    pub actual_minor: i64,
    pub category: Category,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "budget_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub planned_minor: i64,
    pub actual_minor: i64,
    pub user_id: String,
    pub category_id: String,
    pub budget_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::budgets::Entity",
        from = "Column::BudgetId",
        to = "super::budgets::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Budget,
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Category,
}

impl Related<super::budgets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Budget.def()
    }
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&BudgetItem> for ActiveModel {
    fn from(item: &BudgetItem) -> Self {
        Self {
            id: ActiveValue::Set(item.id.to_string()),
            planned_minor: ActiveValue::Set(item.planned_minor),
            actual_minor: ActiveValue::Set(item.actual_minor),
            user_id: ActiveValue::Set(item.user_id.to_string()),
            category_id: ActiveValue::Set(item.category_id.to_string()),
            budget_id: ActiveValue::Set(item.budget_id.to_string()),
        }
    }
}

impl TryFrom<Model> for BudgetItem {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_uuid(&model.id, "budget item")?,
            planned_minor: model.planned_minor,
            actual_minor: model.actual_minor,
            user_id: parse_uuid(&model.user_id, "user")?,
            category_id: parse_uuid(&model.category_id, "category")?,
            budget_id: parse_uuid(&model.budget_id, "budget")?,
        })
    }
}

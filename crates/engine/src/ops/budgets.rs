use chrono::Utc;
use sea_orm::{TransactionTrait, prelude::*};
use uuid::Uuid;

use crate::{
    Budget, BudgetItem, CreateBudgetCmd, ResultEngine, budget_items, budgets,
    util::normalize_optional_text,
};

use super::{Engine, with_tx};

impl Engine {
    /// Creates a budget and all of its items as one unit.
    ///
    /// The owning user must exist. Items inherit the budget's `user_id` and
    /// start with `actual_minor = 0`. Categories are not looked up here: an
    /// unknown category makes the item insert fail and the whole budget is
    /// rolled back.
    pub async fn create_budget(&self, cmd: CreateBudgetCmd) -> ResultEngine<Uuid> {
        let CreateBudgetCmd {
            name,
            start_date,
            end_date,
            user_id,
            items,
        } = cmd;

        with_tx!(self, |db_tx| {
            Self::require_user(&db_tx, user_id).await?;

            let budget = Budget {
                id: Uuid::new_v4(),
                name: normalize_optional_text(name.as_deref()).unwrap_or_default(),
                start_date,
                end_date,
                user_id,
                created_at: Utc::now(),
            };
            budgets::ActiveModel::from(&budget).insert(&db_tx).await?;

            let item_count = items.len();
            if !items.is_empty() {
                let models = items.into_iter().map(|input| {
                    let item =
                        BudgetItem::new(input.planned_minor, user_id, input.category_id, budget.id);
                    budget_items::ActiveModel::from(&item)
                });
                budget_items::Entity::insert_many(models)
                    .exec(&db_tx)
                    .await?;
            }

            tracing::info!(budget_id = %budget.id, items = item_count, "created budget");
            Ok(budget.id)
        })
    }

    /// Return a budget by id.
    pub async fn budget(&self, budget_id: Uuid) -> ResultEngine<Budget> {
        Self::require_budget(&self.database, budget_id)
            .await?
            .try_into()
    }
}

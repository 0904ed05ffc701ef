use sea_orm::{QueryFilter, prelude::*};
use uuid::Uuid;

use crate::{
    Budget, BudgetItem, Category, CreateBudgetItemCmd, EngineError, ReconciledItem, ResultEngine,
    Transaction, budget_items, categories, reconcile, transactions,
};

use super::Engine;

impl Engine {
    /// Add one item to an existing budget.
    ///
    /// References are checked in order user, budget, category and the first
    /// missing one is reported. No check is made for an existing item with
    /// the same category.
    pub async fn create_budget_item(&self, cmd: CreateBudgetItemCmd) -> ResultEngine<Uuid> {
        Self::require_user(&self.database, cmd.user_id).await?;
        Self::require_budget(&self.database, cmd.budget_id).await?;
        Self::require_category(&self.database, cmd.category_id).await?;

        let item = BudgetItem::new(cmd.planned_minor, cmd.user_id, cmd.category_id, cmd.budget_id);
        budget_items::ActiveModel::from(&item)
            .insert(&self.database)
            .await?;

        tracing::info!(budget_item_id = %item.id, budget_id = %item.budget_id, "created budget item");
        Ok(item.id)
    }

    /// Return the items of a budget with their actual amounts computed from
    /// the transactions dated inside the budget period (both ends included).
    ///
    /// A budget without items, or a period without any transaction, is an
    /// `EmptyCollection` error rather than an empty or all-zero result.
    pub async fn budget_items(&self, budget_id: Uuid) -> ResultEngine<Vec<ReconciledItem>> {
        let budget: Budget = Self::require_budget(&self.database, budget_id)
            .await?
            .try_into()?;

        let item_rows = budget_items::Entity::find()
            .filter(budget_items::Column::BudgetId.eq(budget.id.to_string()))
            .find_also_related(categories::Entity)
            .all(&self.database)
            .await?;
        if item_rows.is_empty() {
            return Err(EngineError::EmptyCollection(
                "budget has no items".to_string(),
            ));
        }

        let mut items: Vec<(BudgetItem, Category)> = Vec::with_capacity(item_rows.len());
        for (item_model, category_model) in item_rows {
            let category_model = category_model
                .ok_or_else(|| EngineError::KeyNotFound("category does not exist".to_string()))?;
            items.push((item_model.try_into()?, category_model.try_into()?));
        }

        let transactions = transactions::Entity::find()
            .filter(transactions::Column::Date.gte(budget.start_date))
            .filter(transactions::Column::Date.lte(budget.end_date))
            .all(&self.database)
            .await?
            .into_iter()
            .map(Transaction::try_from)
            .collect::<ResultEngine<Vec<_>>>()?;
        if transactions.is_empty() {
            return Err(EngineError::EmptyCollection(
                "no transactions recorded in this period".to_string(),
            ));
        }

        tracing::debug!(
            budget_id = %budget.id,
            items = items.len(),
            transactions = transactions.len(),
            "reconciling budget"
        );
        reconcile(items, &transactions)
    }
}

use chrono::Utc;
use sea_orm::{QueryOrder, TransactionTrait, prelude::*};
use uuid::Uuid;

use crate::{
    Category, CategoryKind, CreateTransactionCmd, EngineError, ResultEngine, Transaction,
    TransactionWithCategory, UpdateTransactionCmd, categories, transactions,
    util::normalize_optional_text,
};

use super::{Engine, with_tx};

fn with_category(
    model: transactions::Model,
    category: Option<categories::Model>,
) -> ResultEngine<TransactionWithCategory> {
    let category = category
        .ok_or_else(|| EngineError::KeyNotFound("category does not exist".to_string()))?;
    Ok(TransactionWithCategory {
        transaction: model.try_into()?,
        category: Category::try_from(category)?,
    })
}

impl Engine {
    /// Record a transaction.
    ///
    /// User and category must exist (checked in that order). The stored
    /// `kind` is copied from the category at this moment.
    pub async fn create_transaction(&self, cmd: CreateTransactionCmd) -> ResultEngine<Uuid> {
        Self::require_user(&self.database, cmd.user_id).await?;
        let category = Self::require_category(&self.database, cmd.category_id).await?;
        let kind = CategoryKind::try_from(category.kind.as_str())?;

        let tx = Transaction {
            id: Uuid::new_v4(),
            amount_minor: cmd.amount_minor,
            description: normalize_optional_text(cmd.description.as_deref()),
            date: cmd.date,
            user_id: cmd.user_id,
            category_id: cmd.category_id,
            kind,
            created_at: Utc::now(),
        };
        transactions::ActiveModel::from(&tx)
            .insert(&self.database)
            .await?;

        tracing::info!(transaction_id = %tx.id, kind = kind.as_str(), "created transaction");
        Ok(tx.id)
    }

    /// Return a transaction with its category.
    pub async fn transaction(&self, transaction_id: Uuid) -> ResultEngine<TransactionWithCategory> {
        let (model, category) = transactions::Entity::find_by_id(transaction_id.to_string())
            .find_also_related(categories::Entity)
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound("transaction does not exist".to_string()))?;
        with_category(model, category)
    }

    /// Return every transaction, most recently created first.
    pub async fn list_transactions(&self) -> ResultEngine<Vec<TransactionWithCategory>> {
        transactions::Entity::find()
            .find_also_related(categories::Entity)
            .order_by_desc(transactions::Column::CreatedAt)
            .all(&self.database)
            .await?
            .into_iter()
            .map(|(model, category)| with_category(model, category))
            .collect()
    }

    /// Apply a partial update to a transaction.
    ///
    /// The stored row is merged with the patch and written back whole.
    /// References are not re-validated and `kind` is not re-derived from a
    /// new category.
    pub async fn update_transaction(&self, cmd: UpdateTransactionCmd) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            let current: Transaction = Self::require_transaction(&db_tx, cmd.transaction_id)
                .await?
                .try_into()?;
            let updated = current.patched(&cmd);

            transactions::ActiveModel::from(&updated)
                .update(&db_tx)
                .await?;

            tracing::info!(transaction_id = %updated.id, "updated transaction");
            Ok(())
        })
    }

    /// Delete a transaction. Budget items are not affected: their actuals
    /// are recomputed on read.
    pub async fn delete_transaction(&self, transaction_id: Uuid) -> ResultEngine<()> {
        Self::require_transaction(&self.database, transaction_id).await?;
        transactions::Entity::delete_by_id(transaction_id.to_string())
            .exec(&self.database)
            .await?;

        tracing::info!(transaction_id = %transaction_id, "deleted transaction");
        Ok(())
    }
}

use sea_orm::{ActiveValue, QueryOrder, prelude::*};
use uuid::Uuid;

use crate::{
    Category, CategoryKind, ResultEngine, categories, util::normalize_required_name,
};

use super::Engine;

impl Engine {
    /// Create a category. The kind is fixed for the category's lifetime.
    pub async fn create_category(&self, title: &str, kind: CategoryKind) -> ResultEngine<Category> {
        let title = normalize_required_name(title, "category title")?;
        let category = Category {
            id: Uuid::new_v4(),
            title,
            kind,
        };

        categories::ActiveModel {
            id: ActiveValue::Set(category.id.to_string()),
            title: ActiveValue::Set(category.title.clone()),
            kind: ActiveValue::Set(kind.as_str().to_string()),
        }
        .insert(&self.database)
        .await?;

        tracing::info!(category_id = %category.id, kind = kind.as_str(), "created category");
        Ok(category)
    }

    /// Return a category by id.
    pub async fn category(&self, category_id: Uuid) -> ResultEngine<Category> {
        Self::require_category(&self.database, category_id)
            .await?
            .try_into()
    }

    /// Return all categories ordered by title.
    pub async fn categories(&self) -> ResultEngine<Vec<Category>> {
        categories::Entity::find()
            .order_by_asc(categories::Column::Title)
            .all(&self.database)
            .await?
            .into_iter()
            .map(Category::try_from)
            .collect()
    }
}

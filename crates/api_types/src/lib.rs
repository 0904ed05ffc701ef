use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Income or expense, as carried on categories and transactions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CategoryKind {
    Expense,
    Income,
}

pub mod user {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct UserView {
        pub id: Uuid,
        pub name: Option<String>,
        pub email: String,
        pub avatar_url: Option<String>,
        pub created_at: DateTime<FixedOffset>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct UserResponse {
        pub user: UserView,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct UserListResponse {
        pub users: Vec<UserView>,
    }
}

pub mod category {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoryView {
        pub id: Uuid,
        pub title: String,
        pub kind: CategoryKind,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoryListResponse {
        pub categories: Vec<CategoryView>,
    }
}

pub mod transaction {
    use super::*;

    /// Category as embedded in a transaction.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionCategory {
        pub id: Uuid,
        pub title: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionView {
        pub id: Uuid,
        /// Signed amount in minor units, as recorded.
        pub amount_minor: i64,
        pub description: Option<String>,
        pub kind: CategoryKind,
        pub user_id: Uuid,
        /// RFC3339 timestamp of the event.
        pub date: DateTime<FixedOffset>,
        pub category: TransactionCategory,
        pub created_at: DateTime<FixedOffset>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionResponse {
        pub transaction: TransactionView,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionListResponse {
        pub transactions: Vec<TransactionView>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionNew {
        pub amount_minor: i64,
        pub description: Option<String>,
        pub category_id: Uuid,
        pub user_id: Uuid,
        /// RFC3339 timestamp, including timezone offset.
        pub date: DateTime<FixedOffset>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionCreated {
        pub transaction_id: Uuid,
    }

    /// Partial update. Omitted (or `null`) fields are left untouched; an
    /// empty `description` clears it.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct TransactionUpdate {
        pub amount_minor: Option<i64>,
        pub description: Option<String>,
        pub category_id: Option<Uuid>,
        pub user_id: Option<Uuid>,
        pub kind: Option<CategoryKind>,
    }
}

pub mod budget {
    use super::*;

    /// One planned line in a new budget.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetItemNew {
        pub planned_minor: i64,
        pub category_id: Uuid,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetNew {
        pub name: Option<String>,
        pub start_date: DateTime<FixedOffset>,
        pub end_date: DateTime<FixedOffset>,
        pub user_id: Uuid,
        #[serde(default)]
        pub budget_items: Vec<BudgetItemNew>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetCreated {
        pub budget_id: Uuid,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetView {
        pub id: Uuid,
        pub name: String,
        pub start_date: DateTime<FixedOffset>,
        pub end_date: DateTime<FixedOffset>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetResponse {
        pub budget: BudgetView,
    }
}

pub mod budget_item {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetItemNew {
        pub planned_minor: i64,
        pub user_id: Uuid,
        pub category_id: Uuid,
        pub budget_id: Uuid,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetItemCreated {
        pub budget_item_id: Uuid,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetItemCategory {
        pub id: Uuid,
        pub title: String,
        pub kind: CategoryKind,
    }

    /// A budget item with its actual amount computed at read time.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetItemView {
        pub id: Uuid,
        pub budget_id: Uuid,
        pub planned_minor: i64,
        pub actual_minor: i64,
        pub category: BudgetItemCategory,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetItemListResponse {
        pub budget_items: Vec<BudgetItemView>,
    }
}

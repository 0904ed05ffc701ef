//! Command structs for engine operations.
//!
//! These types group parameters for write operations (budget, budget item
//! and transaction creation, transaction update), keeping call sites
//! readable and avoiding long argument lists.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::CategoryKind;

/// One planned line of a new budget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BudgetItemInput {
    pub planned_minor: i64,
    pub category_id: Uuid,
}

impl BudgetItemInput {
    #[must_use]
    pub fn new(planned_minor: i64, category_id: Uuid) -> Self {
        Self {
            planned_minor,
            category_id,
        }
    }
}

/// Create a budget together with its items.
#[derive(Clone, Debug)]
pub struct CreateBudgetCmd {
    pub name: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub user_id: Uuid,
    pub items: Vec<BudgetItemInput>,
}

impl CreateBudgetCmd {
    #[must_use]
    pub fn new(user_id: Uuid, start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> Self {
        Self {
            name: None,
            start_date,
            end_date,
            user_id,
            items: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn item(mut self, planned_minor: i64, category_id: Uuid) -> Self {
        self.items
            .push(BudgetItemInput::new(planned_minor, category_id));
        self
    }
}

/// Add a single item to an existing budget.
#[derive(Clone, Debug)]
pub struct CreateBudgetItemCmd {
    pub planned_minor: i64,
    pub user_id: Uuid,
    pub category_id: Uuid,
    pub budget_id: Uuid,
}

/// Record a transaction. The kind is taken from the category.
#[derive(Clone, Debug)]
pub struct CreateTransactionCmd {
    pub amount_minor: i64,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub user_id: Uuid,
    pub category_id: Uuid,
}

impl CreateTransactionCmd {
    #[must_use]
    pub fn new(user_id: Uuid, category_id: Uuid, amount_minor: i64, date: DateTime<Utc>) -> Self {
        Self {
            amount_minor,
            description: None,
            date,
            user_id,
            category_id,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Partial update of a transaction. `None` leaves the field untouched.
#[derive(Clone, Debug, Default)]
pub struct UpdateTransactionCmd {
    pub transaction_id: Uuid,
    pub amount_minor: Option<i64>,
    pub description: Option<String>,
    pub category_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub kind: Option<CategoryKind>,
}

impl UpdateTransactionCmd {
    #[must_use]
    pub fn new(transaction_id: Uuid) -> Self {
        Self {
            transaction_id,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn amount_minor(mut self, amount_minor: i64) -> Self {
        self.amount_minor = Some(amount_minor);
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn category_id(mut self, category_id: Uuid) -> Self {
        self.category_id = Some(category_id);
        self
    }

    #[must_use]
    pub fn user_id(mut self, user_id: Uuid) -> Self {
        self.user_id = Some(user_id);
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: CategoryKind) -> Self {
        self.kind = Some(kind);
        self
    }
}

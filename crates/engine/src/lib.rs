//! Stashy engine: budgets, budget items and transactions on top of sea-orm.
//!
//! The [`Engine`] is stateless between calls. Every operation reads and
//! writes through the database connection; the only multi-record write,
//! budget creation, runs inside a single DB transaction.

pub use budget_items::{BudgetItem, ReconciledItem};
pub use budgets::Budget;
pub use categories::{Category, CategoryKind};
pub use commands::{
    BudgetItemInput, CreateBudgetCmd, CreateBudgetItemCmd, CreateTransactionCmd,
    UpdateTransactionCmd,
};
pub use error::EngineError;
pub use ops::{Engine, EngineBuilder};
pub use reconcile::{reconcile, totals_by_category};
pub use transactions::{Transaction, TransactionWithCategory};
pub use users::User;

mod budget_items;
mod budgets;
mod categories;
mod commands;
mod error;
mod ops;
mod password;
mod reconcile;
mod transactions;
mod users;
mod util;

type ResultEngine<T> = Result<T, EngineError>;

//! Initial schema migration.
//!
//! Creates the complete schema for Stashy:
//!
//! - `users`: account owners, authenticated with an Argon2 password hash
//! - `categories`: income/expense classification, seeded by admins
//! - `transactions`: dated money events tagged with a category
//! - `budgets`: planning periods owned by a user
//! - `budget_items`: per-category planned amounts inside a budget

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// ─────────────────────────────────────────────────────────────────────────────
// Table identifiers
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Iden)]
enum Users {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    AvatarUrl,
    CreatedAt,
}

#[derive(Iden)]
enum Categories {
    Table,
    Id,
    Title,
    Kind,
}

#[derive(Iden)]
enum Transactions {
    Table,
    Id,
    AmountMinor,
    Description,
    Date,
    UserId,
    CategoryId,
    Kind,
    CreatedAt,
}

#[derive(Iden)]
enum Budgets {
    Table,
    Id,
    Name,
    StartDate,
    EndDate,
    UserId,
    CreatedAt,
}

#[derive(Iden)]
enum BudgetItems {
    Table,
    Id,
    PlannedMinor,
    ActualMinor,
    UserId,
    CategoryId,
    BudgetId,
}

// ─────────────────────────────────────────────────────────────────────────────
// Migration implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ───────────────────────────────────────────────────────────────────
        // 1. Users
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Users::Name).string())
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::AvatarUrl).string())
                    .col(ColumnDef::new(Users::CreatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 2. Categories
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Categories::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Categories::Title).string().not_null())
                    .col(ColumnDef::new(Categories::Kind).string().not_null())
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 3. Transactions
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Transactions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Transactions::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Transactions::AmountMinor)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Transactions::Description).string())
                    .col(ColumnDef::new(Transactions::Date).timestamp().not_null())
                    .col(ColumnDef::new(Transactions::UserId).string().not_null())
                    .col(ColumnDef::new(Transactions::CategoryId).string().not_null())
                    .col(ColumnDef::new(Transactions::Kind).string().not_null())
                    .col(
                        ColumnDef::new(Transactions::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-transactions-user_id")
                            .from(Transactions::Table, Transactions::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-transactions-category_id")
                            .from(Transactions::Table, Transactions::CategoryId)
                            .to(Categories::Table, Categories::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-transactions-date")
                    .table(Transactions::Table)
                    .col(Transactions::Date)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-transactions-created_at")
                    .table(Transactions::Table)
                    .col(Transactions::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 4. Budgets
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Budgets::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Budgets::Id).string().not_null().primary_key())
                    .col(
                        ColumnDef::new(Budgets::Name)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Budgets::StartDate).timestamp().not_null())
                    .col(ColumnDef::new(Budgets::EndDate).timestamp().not_null())
                    .col(ColumnDef::new(Budgets::UserId).string().not_null())
                    .col(ColumnDef::new(Budgets::CreatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-budgets-user_id")
                            .from(Budgets::Table, Budgets::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 5. Budget items
        // ───────────────────────────────────────────────────────────────────
        // No unique (budget_id, category_id): several items may share a category.
        manager
            .create_table(
                Table::create()
                    .table(BudgetItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BudgetItems::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(BudgetItems::PlannedMinor)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BudgetItems::ActualMinor)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(BudgetItems::UserId).string().not_null())
                    .col(ColumnDef::new(BudgetItems::CategoryId).string().not_null())
                    .col(ColumnDef::new(BudgetItems::BudgetId).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-budget_items-user_id")
                            .from(BudgetItems::Table, BudgetItems::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-budget_items-category_id")
                            .from(BudgetItems::Table, BudgetItems::CategoryId)
                            .to(Categories::Table, Categories::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-budget_items-budget_id")
                            .from(BudgetItems::Table, BudgetItems::BudgetId)
                            .to(Budgets::Table, Budgets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-budget_items-budget_id")
                    .table(BudgetItems::Table)
                    .col(BudgetItems::BudgetId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Reverse order of creation (FK dependencies).
        manager
            .drop_table(Table::drop().table(BudgetItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Budgets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Transactions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Categories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

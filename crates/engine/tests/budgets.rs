use chrono::Duration;
use engine::{CategoryKind, CreateBudgetCmd, CreateBudgetItemCmd, CreateTransactionCmd, EngineError};
use uuid::Uuid;

mod common;

use common::{category, count, day, engine_with_db, insert_user};

#[tokio::test]
async fn create_budget_persists_budget_and_items() {
    let (engine, db) = engine_with_db().await;
    let user_id = insert_user(&db, "alice@example.com").await;
    let rent = category(&engine, "Rent", CategoryKind::Expense).await;
    let groceries = category(&engine, "Groceries", CategoryKind::Expense).await;

    let budget_id = engine
        .create_budget(
            CreateBudgetCmd::new(user_id, day(2024, 1, 1), day(2024, 1, 31))
                .name("January")
                .item(120_000, rent)
                .item(50_000, groceries),
        )
        .await
        .unwrap();

    let budget = engine.budget(budget_id).await.unwrap();
    assert_eq!(budget.name, "January");
    assert_eq!(budget.user_id, user_id);
    assert_eq!(count(&db, "budgets").await, 1);
    assert_eq!(count(&db, "budget_items").await, 2);
}

#[tokio::test]
async fn budget_name_defaults_to_empty() {
    let (engine, db) = engine_with_db().await;
    let user_id = insert_user(&db, "alice@example.com").await;

    let budget_id = engine
        .create_budget(CreateBudgetCmd::new(user_id, day(2024, 1, 1), day(2024, 1, 31)))
        .await
        .unwrap();

    assert_eq!(engine.budget(budget_id).await.unwrap().name, "");
}

#[tokio::test]
async fn create_budget_with_unknown_user_writes_nothing() {
    let (engine, db) = engine_with_db().await;
    let rent = category(&engine, "Rent", CategoryKind::Expense).await;

    let err = engine
        .create_budget(
            CreateBudgetCmd::new(Uuid::new_v4(), day(2024, 1, 1), day(2024, 1, 31))
                .item(500, rent),
        )
        .await
        .unwrap_err();

    assert_eq!(
        err,
        EngineError::KeyNotFound("user does not exist".to_string())
    );
    assert_eq!(count(&db, "budgets").await, 0);
    assert_eq!(count(&db, "budget_items").await, 0);
}

#[tokio::test]
async fn failing_item_insert_rolls_back_budget() {
    let (engine, db) = engine_with_db().await;
    let user_id = insert_user(&db, "alice@example.com").await;
    let rent = category(&engine, "Rent", CategoryKind::Expense).await;

    // The second item points at a category that does not exist.
    let err = engine
        .create_budget(
            CreateBudgetCmd::new(user_id, day(2024, 1, 1), day(2024, 1, 31))
                .item(500, rent)
                .item(300, Uuid::new_v4()),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, EngineError::Database(_)));
    assert_eq!(count(&db, "budgets").await, 0);
    assert_eq!(count(&db, "budget_items").await, 0);
}

#[tokio::test]
async fn reconciliation_sums_matching_category_in_period() {
    let (engine, db) = engine_with_db().await;
    let user_id = insert_user(&db, "alice@example.com").await;
    let c1 = category(&engine, "Groceries", CategoryKind::Expense).await;
    let c2 = category(&engine, "Rent", CategoryKind::Expense).await;

    let budget_id = engine
        .create_budget(
            CreateBudgetCmd::new(user_id, day(2024, 1, 1), day(2024, 1, 31)).item(500, c1),
        )
        .await
        .unwrap();

    for (amount, category_id, date) in [
        (100, c1, day(2024, 1, 10)),
        (50, c1, day(2024, 1, 20)),
        (9999, c2, day(2024, 1, 15)),
    ] {
        engine
            .create_transaction(CreateTransactionCmd::new(user_id, category_id, amount, date))
            .await
            .unwrap();
    }

    let items = engine.budget_items(budget_id).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].actual_minor, 150);
    assert_eq!(items[0].planned_minor, 500);
    assert_eq!(items[0].budget_id, budget_id);
    assert_eq!(items[0].category.id, c1);
    assert_eq!(items[0].category.title, "Groceries");
}

#[tokio::test]
async fn period_bounds_are_inclusive() {
    let (engine, db) = engine_with_db().await;
    let user_id = insert_user(&db, "alice@example.com").await;
    let c1 = category(&engine, "Groceries", CategoryKind::Expense).await;

    let budget_id = engine
        .create_budget(
            CreateBudgetCmd::new(user_id, day(2024, 1, 1), day(2024, 1, 31)).item(500, c1),
        )
        .await
        .unwrap();

    for (amount, date) in [
        (1, day(2024, 1, 1)),
        (10, day(2024, 1, 31)),
        (100, day(2023, 12, 31)),
        (1000, day(2024, 2, 1)),
    ] {
        engine
            .create_transaction(CreateTransactionCmd::new(user_id, c1, amount, date))
            .await
            .unwrap();
    }

    let items = engine.budget_items(budget_id).await.unwrap();
    assert_eq!(items[0].actual_minor, 11);
}

#[tokio::test]
async fn period_bounds_hold_at_sub_second_precision() {
    let (engine, db) = engine_with_db().await;
    let user_id = insert_user(&db, "alice@example.com").await;
    let c1 = category(&engine, "Groceries", CategoryKind::Expense).await;
    let start = day(2024, 1, 1);
    let end = day(2024, 1, 31) + Duration::milliseconds(250);

    let budget_id = engine
        .create_budget(CreateBudgetCmd::new(user_id, start, end).item(500, c1))
        .await
        .unwrap();

    for (amount, date) in [
        (1, start),
        (10, start + Duration::milliseconds(1)),
        (100_000, end),
        (1_000, start - Duration::milliseconds(1)),
        (10_000, end + Duration::milliseconds(1)),
    ] {
        engine
            .create_transaction(CreateTransactionCmd::new(user_id, c1, amount, date))
            .await
            .unwrap();
    }

    let items = engine.budget_items(budget_id).await.unwrap();
    assert_eq!(items[0].actual_minor, 100_011);
}

#[tokio::test]
async fn items_without_matches_report_zero() {
    let (engine, db) = engine_with_db().await;
    let user_id = insert_user(&db, "alice@example.com").await;
    let groceries = category(&engine, "Groceries", CategoryKind::Expense).await;
    let pharmacy = category(&engine, "Pharmacy", CategoryKind::Expense).await;

    let budget_id = engine
        .create_budget(
            CreateBudgetCmd::new(user_id, day(2024, 1, 1), day(2024, 1, 31))
                .item(500, groceries)
                .item(80, pharmacy),
        )
        .await
        .unwrap();
    engine
        .create_transaction(CreateTransactionCmd::new(
            user_id,
            groceries,
            42,
            day(2024, 1, 5),
        ))
        .await
        .unwrap();

    let items = engine.budget_items(budget_id).await.unwrap();
    let actual_for = |category_id: Uuid| {
        items
            .iter()
            .find(|item| item.category.id == category_id)
            .map(|item| item.actual_minor)
    };
    assert_eq!(actual_for(groceries), Some(42));
    assert_eq!(actual_for(pharmacy), Some(0));
}

#[tokio::test]
async fn period_without_transactions_is_an_error() {
    let (engine, db) = engine_with_db().await;
    let user_id = insert_user(&db, "alice@example.com").await;
    let c1 = category(&engine, "Groceries", CategoryKind::Expense).await;

    let budget_id = engine
        .create_budget(
            CreateBudgetCmd::new(user_id, day(2024, 1, 1), day(2024, 1, 31)).item(500, c1),
        )
        .await
        .unwrap();

    // Activity outside the period does not count.
    engine
        .create_transaction(CreateTransactionCmd::new(user_id, c1, 10, day(2024, 3, 1)))
        .await
        .unwrap();

    assert_eq!(
        engine.budget_items(budget_id).await,
        Err(EngineError::EmptyCollection(
            "no transactions recorded in this period".to_string()
        ))
    );
}

#[tokio::test]
async fn budget_without_items_is_an_error() {
    let (engine, db) = engine_with_db().await;
    let user_id = insert_user(&db, "alice@example.com").await;
    let c1 = category(&engine, "Groceries", CategoryKind::Expense).await;

    let budget_id = engine
        .create_budget(CreateBudgetCmd::new(user_id, day(2024, 1, 1), day(2024, 1, 31)))
        .await
        .unwrap();
    engine
        .create_transaction(CreateTransactionCmd::new(user_id, c1, 10, day(2024, 1, 2)))
        .await
        .unwrap();

    assert_eq!(
        engine.budget_items(budget_id).await,
        Err(EngineError::EmptyCollection("budget has no items".to_string()))
    );
}

#[tokio::test]
async fn unknown_budget_is_not_found() {
    let (engine, _db) = engine_with_db().await;

    assert_eq!(
        engine.budget_items(Uuid::new_v4()).await,
        Err(EngineError::KeyNotFound("budget does not exist".to_string()))
    );
    assert_eq!(
        engine.budget(Uuid::new_v4()).await,
        Err(EngineError::KeyNotFound("budget does not exist".to_string()))
    );
}

#[tokio::test]
async fn duplicate_category_items_each_count_everything() {
    let (engine, db) = engine_with_db().await;
    let user_id = insert_user(&db, "alice@example.com").await;
    let c1 = category(&engine, "Groceries", CategoryKind::Expense).await;

    let budget_id = engine
        .create_budget(
            CreateBudgetCmd::new(user_id, day(2024, 1, 1), day(2024, 1, 31))
                .item(100, c1)
                .item(200, c1),
        )
        .await
        .unwrap();
    engine
        .create_transaction(CreateTransactionCmd::new(user_id, c1, 75, day(2024, 1, 3)))
        .await
        .unwrap();

    let items = engine.budget_items(budget_id).await.unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|item| item.actual_minor == 75));
}

#[tokio::test]
async fn deleted_transactions_drop_out_of_actuals() {
    let (engine, db) = engine_with_db().await;
    let user_id = insert_user(&db, "alice@example.com").await;
    let c1 = category(&engine, "Groceries", CategoryKind::Expense).await;

    let budget_id = engine
        .create_budget(
            CreateBudgetCmd::new(user_id, day(2024, 1, 1), day(2024, 1, 31)).item(100, c1),
        )
        .await
        .unwrap();
    engine
        .create_transaction(CreateTransactionCmd::new(user_id, c1, 30, day(2024, 1, 3)))
        .await
        .unwrap();
    let removed = engine
        .create_transaction(CreateTransactionCmd::new(user_id, c1, 20, day(2024, 1, 4)))
        .await
        .unwrap();

    assert_eq!(engine.budget_items(budget_id).await.unwrap()[0].actual_minor, 50);
    engine.delete_transaction(removed).await.unwrap();
    assert_eq!(engine.budget_items(budget_id).await.unwrap()[0].actual_minor, 30);
    assert_eq!(count(&db, "budget_items").await, 1);
}

#[tokio::test]
async fn create_budget_item_checks_references_in_order() {
    let (engine, db) = engine_with_db().await;
    let user_id = insert_user(&db, "alice@example.com").await;
    let c1 = category(&engine, "Groceries", CategoryKind::Expense).await;
    let budget_id = engine
        .create_budget(CreateBudgetCmd::new(user_id, day(2024, 1, 1), day(2024, 1, 31)))
        .await
        .unwrap();

    let cmd = |user_id, budget_id, category_id| CreateBudgetItemCmd {
        planned_minor: 500,
        user_id,
        category_id,
        budget_id,
    };

    assert_eq!(
        engine
            .create_budget_item(cmd(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()))
            .await,
        Err(EngineError::KeyNotFound("user does not exist".to_string()))
    );
    assert_eq!(
        engine
            .create_budget_item(cmd(user_id, Uuid::new_v4(), Uuid::new_v4()))
            .await,
        Err(EngineError::KeyNotFound("budget does not exist".to_string()))
    );
    assert_eq!(
        engine
            .create_budget_item(cmd(user_id, budget_id, Uuid::new_v4()))
            .await,
        Err(EngineError::KeyNotFound("category does not exist".to_string()))
    );
    assert_eq!(count(&db, "budget_items").await, 0);

    engine
        .create_budget_item(cmd(user_id, budget_id, c1))
        .await
        .unwrap();
    engine
        .create_transaction(CreateTransactionCmd::new(user_id, c1, 12, day(2024, 1, 9)))
        .await
        .unwrap();

    let items = engine.budget_items(budget_id).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].planned_minor, 500);
    assert_eq!(items[0].actual_minor, 12);
}

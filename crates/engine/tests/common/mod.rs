#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};

use engine::{CategoryKind, Engine};
use migration::MigratorTrait;
use uuid::Uuid;

pub async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();
    (engine, db)
}

/// Insert a user directly, skipping password hashing.
pub async fn insert_user(db: &DatabaseConnection, email: &str) -> Uuid {
    let id = Uuid::new_v4();
    let backend = db.get_database_backend();
    db.execute(Statement::from_sql_and_values(
        backend,
        "INSERT INTO users (id, email, password_hash, created_at) VALUES (?, ?, ?, ?)",
        vec![
            id.to_string().into(),
            email.into(),
            "not-a-hash".into(),
            "2024-01-01T00:00:00+00:00".into(),
        ],
    ))
    .await
    .unwrap();
    id
}

pub async fn category(engine: &Engine, title: &str, kind: CategoryKind) -> Uuid {
    engine.create_category(title, kind).await.unwrap().id
}

pub async fn count(db: &DatabaseConnection, table: &str) -> i64 {
    let backend = db.get_database_backend();
    let row = db
        .query_one(Statement::from_string(
            backend,
            format!("SELECT COUNT(*) AS n FROM {table}"),
        ))
        .await
        .unwrap()
        .unwrap();
    row.try_get::<i64>("", "n").unwrap()
}

pub fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

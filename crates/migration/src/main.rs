use clap::{Parser, Subcommand};
use sea_orm::Database;
use sea_orm_migration::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "migration")]
#[command(about = "Apply or inspect the Stashy database schema")]
struct Cli {
    /// Database connection string (also read from `DATABASE_URL`).
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "sqlite:./stashy.db?mode=rwc"
    )]
    database_url: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Default, PartialEq, Eq)]
enum Command {
    /// Apply pending migrations.
    #[default]
    Up,
    /// Roll back every applied migration.
    Down,
    /// Drop all tables and apply every migration again.
    Fresh,
    /// Print applied and pending migrations.
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    let db = Database::connect(&cli.database_url).await?;

    match cli.command.unwrap_or_default() {
        Command::Up => migration::Migrator::up(&db, None).await?,
        Command::Down => migration::Migrator::down(&db, None).await?,
        Command::Fresh => migration::Migrator::fresh(&db).await?,
        Command::Status => migration::Migrator::status(&db).await?,
    }

    Ok(())
}

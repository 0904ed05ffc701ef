use std::{error::Error, io::Write};

use clap::{Args, Parser, Subcommand, ValueEnum};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    style::Print,
    terminal,
    terminal::ClearType,
};
use engine::{CategoryKind, Engine, EngineError};
use migration::MigratorTrait;
use sea_orm::{Database, DatabaseConnection};

/// Categories created by `seed`, skipped when a category with the same
/// title already exists.
const SEED_CATEGORIES: &[(&str, CategoryKind)] = &[
    ("Aluguel", CategoryKind::Expense),
    ("Supermercado", CategoryKind::Expense),
    ("Seguro Carro", CategoryKind::Expense),
    ("Farmácia e Exames", CategoryKind::Expense),
    ("Plano de celular", CategoryKind::Expense),
    ("Salario", CategoryKind::Income),
];

#[derive(Parser, Debug)]
#[command(name = "stashy_admin")]
#[command(about = "Admin utilities for Stashy (bootstrap users and categories)")]
struct Cli {
    /// Database connection string (also read from `DATABASE_URL`).
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "sqlite:./stashy.db?mode=rwc"
    )]
    database_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    User(User),
    Category(Category),
    /// Create the default set of categories.
    Seed,
}

#[derive(Args, Debug)]
struct User {
    #[command(subcommand)]
    command: UserCommand,
}

#[derive(Subcommand, Debug)]
enum UserCommand {
    Create(UserCreateArgs),
}

#[derive(Args, Debug)]
struct UserCreateArgs {
    #[arg(long)]
    email: String,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    avatar_url: Option<String>,
}

#[derive(Args, Debug)]
struct Category {
    #[command(subcommand)]
    command: CategoryCommand,
}

#[derive(Subcommand, Debug)]
enum CategoryCommand {
    Create(CategoryCreateArgs),
    List,
}

#[derive(Args, Debug)]
struct CategoryCreateArgs {
    #[arg(long)]
    title: String,
    #[arg(long, value_enum)]
    kind: KindArg,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindArg {
    Expense,
    Income,
}

impl From<KindArg> for CategoryKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Expense => CategoryKind::Expense,
            KindArg::Income => CategoryKind::Income,
        }
    }
}

struct RawModeGuard;

impl RawModeGuard {
    fn enter() -> Result<Self, Box<dyn Error + Send + Sync>> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

fn prompt_password(prompt: &str) -> Result<String, Box<dyn Error + Send + Sync>> {
    let _raw = RawModeGuard::enter()?;

    let mut out = std::io::stderr();
    execute!(
        out,
        cursor::MoveToColumn(0),
        terminal::Clear(ClearType::CurrentLine),
        Print(prompt)
    )?;
    out.flush()?;

    let mut buf = String::new();
    loop {
        let Event::Key(KeyEvent {
            code, modifiers, ..
        }) = event::read()?
        else {
            continue;
        };

        match code {
            KeyCode::Enter => {
                execute!(out, Print("\r\n"))?;
                out.flush()?;
                break;
            }
            KeyCode::Backspace => {
                if buf.pop().is_some() {
                    execute!(out, cursor::MoveLeft(1), Print(" "), cursor::MoveLeft(1))?;
                    out.flush()?;
                }
            }
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                execute!(out, Print("\r\n"))?;
                out.flush()?;
                return Err("interrupted".into());
            }
            KeyCode::Char(ch) if !modifiers.contains(KeyModifiers::CONTROL) => {
                buf.push(ch);
                execute!(out, Print("*"))?;
                out.flush()?;
            }
            _ => {}
        }
    }

    Ok(buf)
}

fn prompt_password_twice() -> Result<String, Box<dyn Error + Send + Sync>> {
    let mut out = std::io::stderr();
    for _ in 0..3 {
        let p1 = prompt_password("Password: ")?;
        if p1.is_empty() {
            execute!(
                out,
                cursor::MoveToColumn(0),
                terminal::Clear(ClearType::CurrentLine),
                Print("Password must not be empty.\r\n")
            )?;
            continue;
        }

        let p2 = prompt_password("Confirm password: ")?;
        if p1 == p2 {
            return Ok(p1);
        }

        execute!(
            out,
            cursor::MoveToColumn(0),
            terminal::Clear(ClearType::CurrentLine),
            Print("Passwords do not match. Try again.\r\n")
        )?;
    }

    Err("too many attempts".into())
}

async fn connect_db(
    database_url: &str,
) -> Result<DatabaseConnection, Box<dyn Error + Send + Sync>> {
    let db = Database::connect(database_url).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

async fn seed(engine: &Engine) -> Result<usize, EngineError> {
    let existing: Vec<String> = engine
        .categories()
        .await?
        .into_iter()
        .map(|category| category.title)
        .collect();

    let mut created = 0;
    for (title, kind) in SEED_CATEGORIES {
        if existing.iter().any(|t| t.as_str() == *title) {
            continue;
        }
        engine.create_category(title, *kind).await?;
        created += 1;
    }
    Ok(created)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();

    let db = connect_db(&cli.database_url).await?;
    let engine = Engine::builder().database(db).build().await?;

    match cli.command {
        Command::User(User {
            command: UserCommand::Create(args),
        }) => {
            let password = prompt_password_twice()?;

            match engine
                .create_user(
                    args.name.as_deref(),
                    &args.email,
                    &password,
                    args.avatar_url.as_deref(),
                )
                .await
            {
                Ok(user_id) => println!("created user: {} ({user_id})", args.email),
                Err(EngineError::ExistingKey(email)) => {
                    eprintln!("user already exists: {email}");
                    std::process::exit(1);
                }
                Err(err) => return Err(err.into()),
            }
        }
        Command::Category(Category {
            command: CategoryCommand::Create(args),
        }) => {
            let category = engine
                .create_category(&args.title, args.kind.into())
                .await?;
            println!("created category: {} ({})", category.title, category.id);
        }
        Command::Category(Category {
            command: CategoryCommand::List,
        }) => {
            for category in engine.categories().await? {
                println!(
                    "{}\t{}\t{}",
                    category.id,
                    category.kind.as_str(),
                    category.title
                );
            }
        }
        Command::Seed => {
            let created = seed(&engine).await?;
            println!("seeded {created} categories");
        }
    }

    Ok(())
}

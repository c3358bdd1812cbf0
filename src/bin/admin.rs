//! CLI administration tool for city2city.
//!
//! Database checks, row counts and city management without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Server version and database size
//! cargo run --bin admin -- db info
//!
//! # Row counts per table
//! cargo run --bin admin -- stats
//!
//! # Add a city (prompts for the name when omitted)
//! cargo run --bin admin -- city create --name Tashkent
//!
//! # Page through cities
//! cargo run --bin admin -- city list --page 2 --limit 20
//! ```
//!
//! # Environment Variables
//!
//! `DATABASE_URL`, or the `DB_*` components; see `city2city::config`.

use city2city::api::dto::city::CityRequest;
use city2city::application::services::ResourceService;
use city2city::config::Config;
use city2city::domain::pagination::{DEFAULT_LIMIT, DEFAULT_PAGE, PageRequest};
use city2city::infrastructure::persistence::PgResourceRepository;
use city2city::server;
use city2city::state::CityService;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use sqlx::PgPool;
use std::sync::Arc;
use validator::Validate;

/// Tables reported by `stats`, in display order.
const TABLES: &[(&str, &str)] = &[
    ("Cities", "cities"),
    ("Customers", "customers"),
    ("Drivers", "drivers"),
    ("Cars", "cars"),
    ("Trips", "trips"),
    ("Trip customers", "trip_customers"),
];

/// CLI tool for managing city2city.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage cities
    City {
        #[command(subcommand)]
        action: CityAction,
    },

    /// Show row counts
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum CityAction {
    /// Create a city
    Create {
        /// City name
        #[arg(short, long)]
        name: Option<String>,
    },

    /// List cities, newest first
    List {
        #[arg(short, long, default_value_t = DEFAULT_PAGE)]
        page: u32,

        #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
        limit: u32,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let pool = server::connect(&config).await?;

    match cli.command {
        Commands::City { action } => handle_city_action(action, pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn handle_city_action(action: CityAction, pool: PgPool) -> Result<()> {
    let service: CityService =
        ResourceService::new(Arc::new(PgResourceRepository::new(Arc::new(pool))));

    match action {
        CityAction::Create { name } => create_city(&service, name).await,
        CityAction::List { page, limit } => {
            list_cities(&service, PageRequest::new(page, limit)).await
        }
    }
}

/// Creates a city, prompting for the name if it was not given.
async fn create_city(service: &CityService, name: Option<String>) -> Result<()> {
    println!("{}", "🏙  Create City".bright_blue().bold());
    println!();

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("City name").interact_text()?,
    };

    let request = CityRequest { name };
    request
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid city: {}", e))?;

    let city = service
        .create(request.into())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create city: {}", e))?;

    println!("{}", "✅ City created".green().bold());
    println!("  ID:   {}", city.id.to_string().bright_black());
    println!("  Name: {}", city.name.cyan());
    println!();

    Ok(())
}

/// Prints one page of cities.
///
/// ```text
/// 📋 Cities (page 1, 2 of 2)
///
///   ID                                    Name                 Created
///   ────────────────────────────────────────────────────────────────────────
///   4b0c8f7e-3a5d-4f4e-9a57-2f0f7a1c9e11  Samarkand            2026-01-15 10:30
///   0e7b2c55-91d3-4d8a-b0a4-6f3c2d1e8b22  Tashkent             2026-01-15 10:29
/// ```
async fn list_cities(service: &CityService, page: PageRequest) -> Result<()> {
    let result = service
        .list(page)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list cities: {}", e))?;

    println!(
        "{}",
        format!(
            "📋 Cities (page {}, {} of {})",
            page.page(),
            result.items.len(),
            result.count
        )
        .bright_blue()
        .bold()
    );
    println!();

    if result.items.is_empty() {
        println!("{}", "  No cities on this page".yellow());
        return Ok(());
    }

    println!(
        "  {:<37} {:<20} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(72).bright_black());

    for city in &result.items {
        println!(
            "  {:<37} {:<20} {}",
            city.id.to_string().bright_black(),
            city.name.cyan(),
            city.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }
    println!();

    Ok(())
}

/// Displays the row count of every resource table.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    for (label, table) in TABLES {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(pool)
            .await
            .with_context(|| format!("Failed to count {table}"))?;

        println!(
            "  {:<16} {}",
            format!("{label}:"),
            count.to_string().bright_green().bold()
        );
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            let size: String = sqlx::query_scalar(
                "SELECT pg_size_pretty(pg_database_size(current_database()))",
            )
            .fetch_one(pool)
            .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Size:       {}", size.bright_white());
            println!();
        }
    }

    Ok(())
}

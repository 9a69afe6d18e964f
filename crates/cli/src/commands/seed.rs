//! Demo data seeding for local development.
//!
//! Idempotent-ish: rerunning against a seeded database fails on the unique
//! keys rather than duplicating rows.

use sqlx::MySqlPool;
use thiserror::Error;

use super::migrate::MigrationError;

/// Errors that can occur during seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Setup(#[from] MigrationError),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

const CATEGORIES: &[(&str, i32)] = &[
    ("Solar Inverters", 1),
    ("Batteries", 2),
    ("Water Heaters", 3),
    ("Accessories", 4),
];

const PRODUCTS: &[(&str, &str, &str, i64)] = &[
    ("Solar Inverter 3kW", "SI-3000", "Solar Inverters", 48_500),
    ("Solar Inverter 5kW", "SI-5000", "Solar Inverters", 72_000),
    ("Tubular Battery 150Ah", "TB-150", "Batteries", 15_800),
    ("Solar Water Heater 200L", "WH-200", "Water Heaters", 32_400),
    ("Remote Monitor Kit", "RM-10", "Accessories", 4_200),
];

/// Seed the database with a demo catalog and one service center.
///
/// # Errors
///
/// Returns [`SeedError`] if the database URL is missing or any insert
/// fails.
pub async fn run() -> Result<(), SeedError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("OSTRICH_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| MigrationError::MissingEnvVar("OSTRICH_DATABASE_URL"))?;

    tracing::info!("Connecting to customer database...");
    let pool = MySqlPool::connect(&database_url).await?;

    tracing::info!("Seeding categories...");
    for (name, order) in CATEGORIES {
        sqlx::query("INSERT INTO product_categories (name, display_order) VALUES (?, ?)")
            .bind(name)
            .bind(order)
            .execute(&pool)
            .await?;
    }

    tracing::info!("Seeding products...");
    for (name, model, category, price) in PRODUCTS {
        sqlx::query(
            r"
            INSERT INTO products (name, model_number, price, category_id)
            SELECT ?, ?, ?, id FROM product_categories WHERE name = ?
            ",
        )
        .bind(name)
        .bind(model)
        .bind(price)
        .bind(category)
        .execute(&pool)
        .await?;
    }

    tracing::info!("Seeding service center...");
    sqlx::query(
        r"
        INSERT INTO service_centers (name, address, city, phone)
        VALUES ('Ostrich Service Center - Pune', '12 FC Road', 'Pune', '+912025521100')
        ",
    )
    .execute(&pool)
    .await?;

    tracing::info!("Seed complete!");
    Ok(())
}

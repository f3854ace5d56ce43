use anyhow::Result;
use sqlx::migrate::MigrateDatabase;
use sqlx_migrator::migrator::{Migrate, Plan};

use crate::config::Config;

#[tracing::instrument(skip(config))]
pub async fn migrate(config: &Config) -> Result<()> {
    tracing::info!("Running database migrations...");

    if !sqlx::Sqlite::database_exists(&config.database.url).await? {
        tracing::info!("Database does not exist, creating: {}", config.database.url);
        sqlx::Sqlite::create_database(&config.database.url).await?;
    }

    let pool = crate::db::create_pool(&config.database.url, 1).await?;
    let mut conn = pool.acquire().await?;
    smartrecipe_db::migrator::<sqlx::Sqlite>()?
        .run(&mut conn, &Plan::apply_all())
        .await?;
    drop(conn);
    pool.close().await;

    tracing::info!("Migrations completed successfully");

    Ok(())
}

#[tracing::instrument(skip(config))]
pub async fn reset(config: &Config) -> Result<()> {
    tracing::info!("Resetting database...");

    if sqlx::Sqlite::database_exists(&config.database.url).await? {
        tracing::warn!("Dropping existing database: {}", config.database.url);
        sqlx::Sqlite::drop_database(&config.database.url).await?;
    } else {
        tracing::info!("Database does not exist, nothing to drop");
    }

    migrate(config).await?;

    tracing::info!("Database reset completed successfully");

    Ok(())
}

/// Inserts the bundled recipes unless the catalog already has entries.
#[tracing::instrument(skip(config))]
pub async fn seed(config: &Config) -> Result<()> {
    let pool = crate::db::create_pool(&config.database.url, 1).await?;
    let command = smartrecipe_recipe::Command(std::sync::Arc::new(
        smartrecipe_recipe::SqliteRecipeRepository(pool.clone()),
    ));

    let inserted = command.seed_catalog().await?;
    if inserted == 0 {
        tracing::info!("Recipe catalog already populated, nothing to seed");
    } else {
        tracing::info!(inserted, "Recipe catalog seeded");
    }

    pool.close().await;

    Ok(())
}

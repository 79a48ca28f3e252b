use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::errors::AppError;
use crate::models::{admin_user, spot};

const SPOT_SEED: &str = include_str!("../data/seed/spots.json");

/// Build a lazily-connecting Postgres pool.
pub fn init_pool(database_url: &str) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(8)
        .acquire_timeout(Duration::from_secs(30))
        .connect_lazy(database_url)?;
    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    log::info!("Database migrations complete");
    Ok(())
}

/// Create the default operator account when no admin exists yet.
pub async fn seed_admin(pool: &PgPool, username: &str, password_hash: &str) -> Result<(), AppError> {
    let count = admin_user::count(pool).await?;
    if count > 0 {
        log::info!("Admin accounts present ({count}), skipping admin seed");
        return Ok(());
    }
    admin_user::create(pool, username, password_hash).await?;
    log::info!("Seeded admin account '{username}'");
    Ok(())
}

/// Load the demo destinations when the spot table is empty.
pub async fn seed_spots(pool: &PgPool) -> Result<usize, AppError> {
    let existing = spot::count(pool).await?;
    if existing > 0 {
        log::info!("Database already has {existing} spots, skipping spot seed");
        return Ok(0);
    }

    let seeds = parse_spot_seed(SPOT_SEED)?;

    let mut created = 0;
    for seed in &seeds {
        spot::insert(pool, seed).await?;
        created += 1;
    }
    log::info!("Seeded {created} spots");
    Ok(created)
}

fn parse_spot_seed(json: &str) -> Result<Vec<spot::NewSpot>, AppError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_spot_seed_parses() {
        let seeds = parse_spot_seed(SPOT_SEED).unwrap();
        assert_eq!(seeds.len(), 12);
        assert_eq!(seeds.iter().filter(|s| s.hidden).count(), 1);
    }

    #[test]
    fn malformed_seed_is_an_error() {
        let err = parse_spot_seed(r#"[{"title": "半筆資料"}]"#).unwrap_err();
        assert!(matches!(err, AppError::Seed(_)));
        assert!(err.to_string().starts_with("Seed data error"));
    }
}

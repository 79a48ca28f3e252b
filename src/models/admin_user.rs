use sqlx::PgPool;

use crate::errors::AppError;

/// Operator account, including the password hash.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AdminUser {
    pub id: i64,
    pub username: String,
    pub password: String,
}

pub async fn count(pool: &PgPool) -> Result<i64, AppError> {
    let n: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM admin_user")
        .fetch_one(pool)
        .await?;
    Ok(n)
}

pub async fn create(pool: &PgPool, username: &str, password_hash: &str) -> Result<i64, AppError> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO admin_user (username, password) VALUES ($1, $2) RETURNING id",
    )
    .bind(username)
    .bind(password_hash)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn find_by_username(pool: &PgPool, username: &str) -> Result<Option<AdminUser>, AppError> {
    let user = sqlx::query_as::<_, AdminUser>(
        "SELECT id, username, password FROM admin_user WHERE username = $1",
    )
    .bind(username.trim())
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

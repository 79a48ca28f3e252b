use sqlx::PgPool;

use crate::errors::AppError;
use super::types::{Inquiry, NewInquiry};

const SELECT_INQUIRY: &str = "\
    SELECT id, purpose, name, email, phone, subject, message, replied, created_timestamp \
    FROM form";

/// Persist a new inquiry; it starts out unreplied.
pub async fn insert(pool: &PgPool, new: &NewInquiry) -> Result<i64, AppError> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO form (purpose, name, email, phone, subject, message, replied) \
         VALUES ($1, $2, $3, $4, $5, $6, FALSE) RETURNING id",
    )
    .bind(&new.purpose)
    .bind(&new.name)
    .bind(&new.email)
    .bind(&new.phone)
    .bind(&new.subject)
    .bind(&new.message)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Inquiries whose replied flag equals `replied`, newest first.
pub async fn find_by_replied(pool: &PgPool, replied: bool) -> Result<Vec<Inquiry>, AppError> {
    let sql = format!(
        "{SELECT_INQUIRY} WHERE replied = $1 ORDER BY created_timestamp DESC NULLS LAST, id DESC"
    );
    let rows = sqlx::query_as::<_, Inquiry>(&sql)
        .bind(replied)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Inquiry>, AppError> {
    let sql = format!("{SELECT_INQUIRY} WHERE id = $1");
    let row = sqlx::query_as::<_, Inquiry>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// (unreplied, replied) counts for the inbox tabs.
pub async fn count_by_status(pool: &PgPool) -> Result<(i64, i64), AppError> {
    let (unreplied, replied): (i64, i64) = sqlx::query_as(
        "SELECT COUNT(*) FILTER (WHERE NOT replied), COUNT(*) FILTER (WHERE replied) FROM form",
    )
    .fetch_one(pool)
    .await?;
    Ok((unreplied, replied))
}

/// Flip the replied flag of an unreplied inquiry. Returns false when the
/// inquiry does not exist or was already replied, so only one caller wins.
pub async fn mark_replied(pool: &PgPool, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("UPDATE form SET replied = TRUE WHERE id = $1 AND NOT replied")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

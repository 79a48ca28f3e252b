use sqlx::PgPool;

use crate::errors::AppError;
use super::types::{NewSpot, Spot, SpotUpdate};

const SELECT_SPOT: &str = "\
    SELECT id, title, subtitle, main_img, img, area, country, city, brief, description, \
           transportation, price, spot_category, click_count, is_selected_for_carousel, hidden \
    FROM spot";

pub async fn count(pool: &PgPool) -> Result<i64, AppError> {
    let n: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM spot")
        .fetch_one(pool)
        .await?;
    Ok(n)
}

pub async fn insert(pool: &PgPool, new: &NewSpot) -> Result<i64, AppError> {
    let f = &new.fields;
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO spot (title, subtitle, main_img, img, area, country, city, brief, \
                           description, transportation, price, spot_category, click_count, \
                           is_selected_for_carousel, hidden) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15) \
         RETURNING id",
    )
    .bind(&f.title)
    .bind(&f.subtitle)
    .bind(&f.main_img)
    .bind(&f.img)
    .bind(&f.area)
    .bind(&f.country)
    .bind(&f.city)
    .bind(&f.brief)
    .bind(&f.description)
    .bind(&f.transportation)
    .bind(f.price)
    .bind(&f.spot_category)
    .bind(new.click_count)
    .bind(new.is_selected_for_carousel)
    .bind(new.hidden)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Every spot, hidden ones included, in id order.
pub async fn find_all(pool: &PgPool) -> Result<Vec<Spot>, AppError> {
    let sql = format!("{SELECT_SPOT} ORDER BY id");
    let rows = sqlx::query_as::<_, Spot>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Spot>, AppError> {
    let sql = format!("{SELECT_SPOT} WHERE id = $1");
    let row = sqlx::query_as::<_, Spot>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Overwrite the editable fields of a spot. Returns false if it does not exist.
pub async fn update(pool: &PgPool, id: i64, f: &SpotUpdate) -> Result<bool, AppError> {
    let result = sqlx::query(
        "UPDATE spot SET title = $1, subtitle = $2, main_img = $3, img = $4, area = $5, \
                country = $6, city = $7, brief = $8, description = $9, transportation = $10, \
                price = $11, spot_category = $12 \
         WHERE id = $13",
    )
    .bind(&f.title)
    .bind(&f.subtitle)
    .bind(&f.main_img)
    .bind(&f.img)
    .bind(&f.area)
    .bind(&f.country)
    .bind(&f.city)
    .bind(&f.brief)
    .bind(&f.description)
    .bind(&f.transportation)
    .bind(f.price)
    .bind(&f.spot_category)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Count a view of a visible spot and return the updated record.
pub async fn record_visit(pool: &PgPool, id: i64) -> Result<Option<Spot>, AppError> {
    let sql = "UPDATE spot SET click_count = click_count + 1 \
               WHERE id = $1 AND NOT hidden \
               RETURNING id, title, subtitle, main_img, img, area, country, city, brief, \
                         description, transportation, price, spot_category, click_count, \
                         is_selected_for_carousel, hidden";
    let row = sqlx::query_as::<_, Spot>(sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

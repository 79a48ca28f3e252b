use actix_session::Session;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::config::Config;
use crate::errors::{AppError, render};
use crate::models::spot::{self, SpotQuery};
use crate::templates_structs::{HomeTemplate, PageContext, SpotDetailTemplate};

/// Home page with the "Top 10" carousel.
pub async fn index(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let spots = spot::recommend(spot::find_all(&pool).await?);
    let ctx = PageContext::public(&session, &config.site_name, "/");
    render(HomeTemplate { ctx, spots })
}

/// Public detail page; every view counts towards the spot's popularity.
pub async fn detail(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    session: Session,
    query: web::Query<SpotQuery>,
) -> Result<HttpResponse, AppError> {
    let id = query.id.ok_or(AppError::NotFound)?;
    let spot = spot::record_visit(&pool, id).await?.ok_or(AppError::NotFound)?;
    let ctx = PageContext::public(&session, &config.site_name, "/spot");
    render(SpotDetailTemplate { ctx, spot })
}

use actix_session::Session;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::auth::csrf;
use crate::auth::session::set_flash;
use crate::config::Config;
use crate::errors::{AppError, render, see_other};
use crate::models::spot::{self, SPOT_CATEGORIES, form::SpotForm};
use crate::templates_structs::{ImageField, PageContext, SelectOption, SpotEditTemplate, SpotListTemplate};
use crate::validate::FieldErrors;

const SECTION: &str = "/admin/spots";

fn edit_page(ctx: PageContext, spot_id: i64, mut form: SpotForm, errors: FieldErrors) -> SpotEditTemplate {
    form.csrf_token = ctx.csrf_token.clone();
    SpotEditTemplate {
        images: ImageField::list(&form.img, &errors),
        categories: SelectOption::list(&SPOT_CATEGORIES, &form.spot_category),
        ctx,
        spot_id,
        form,
        errors,
    }
}

pub async fn list(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let spots = spot::find_all(&pool).await?;
    let ctx = PageContext::admin(&session, &config.site_name, SECTION);
    render(SpotListTemplate { ctx, spots })
}

pub async fn edit_form(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let existing = spot::find_by_id(&pool, id).await?.ok_or(AppError::NotFound)?;
    let ctx = PageContext::admin(&session, &config.site_name, SECTION);
    render(edit_page(ctx, id, SpotForm::from_spot(&existing), FieldErrors::new()))
}

/// Handles both field-array edits (add/remove an image row) and saving.
/// Repeated `img` keys rule out a typed form struct, so the body arrives as pairs.
pub async fn update(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    session: Session,
    path: web::Path<i64>,
    body: web::Form<Vec<(String, String)>>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let (mut form, action) = SpotForm::from_pairs(body.into_inner());
    csrf::validate_csrf(&session, &form.csrf_token)?;

    if spot::find_by_id(&pool, id).await?.is_none() {
        return Err(AppError::NotFound);
    }

    if form.apply_image_action(action) {
        let mut errors = FieldErrors::new();
        errors.check("img", form.image_count_error());
        let ctx = PageContext::admin(&session, &config.site_name, SECTION);
        return render(edit_page(ctx, id, form, errors));
    }

    let update = match form.to_update() {
        Ok(u) => u,
        Err(errors) => {
            let ctx = PageContext::admin(&session, &config.site_name, SECTION);
            return render(edit_page(ctx, id, form, errors));
        }
    };

    match spot::update(&pool, id, &update).await {
        Ok(true) => {
            log::info!("Spot {id} updated");
            set_flash(&session, "已修改景點資料！");
            Ok(see_other(&format!("/admin/spots/{id}/edit")))
        }
        Ok(false) => Err(AppError::NotFound),
        Err(e) => {
            log::error!("Updating spot {id} failed: {e}");
            set_flash(&session, "更新資料失敗，請重試。");
            let ctx = PageContext::admin(&session, &config.site_name, SECTION);
            render(edit_page(ctx, id, form, FieldErrors::new()))
        }
    }
}

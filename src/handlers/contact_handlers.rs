use actix_session::Session;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::auth::csrf;
use crate::config::Config;
use crate::errors::{AppError, render};
use crate::models::inquiry::{self, ContactForm, SUBJECT_OPTIONS};
use crate::templates_structs::{ContactTemplate, PageContext, SelectOption};
use crate::validate::FieldErrors;

fn page(ctx: PageContext, form: ContactForm, errors: FieldErrors, submitted: bool) -> ContactTemplate {
    let subject_options = SelectOption::list(&SUBJECT_OPTIONS, &form.subject);
    ContactTemplate { ctx, form, errors, subject_options, submitted }
}

pub async fn form(
    config: web::Data<Config>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::public(&session, &config.site_name, "/contact");
    let form = ContactForm::reset(&ctx.csrf_token);
    render(page(ctx, form, FieldErrors::new(), false))
}

pub async fn submit(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    session: Session,
    form: web::Form<ContactForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let form = form.into_inner();
    let ctx = PageContext::public(&session, &config.site_name, "/contact");

    let errors = form.validate();
    if !errors.is_empty() {
        return render(page(ctx, form, errors, false));
    }

    match inquiry::insert(&pool, &form.to_new_inquiry()).await {
        Ok(id) => {
            log::info!("Stored inquiry {id} ({})", form.subject);
            let blank = ContactForm::reset(&ctx.csrf_token);
            render(page(ctx, blank, FieldErrors::new(), true))
        }
        Err(e) => {
            log::error!("Error submitting contact form: {e}");
            render(page(ctx, form, FieldErrors::new(), false))
        }
    }
}

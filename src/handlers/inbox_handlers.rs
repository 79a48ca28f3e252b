use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;

use crate::auth::csrf;
use crate::auth::session::set_flash;
use crate::config::Config;
use crate::errors::{AppError, render, see_other};
use crate::mailer::{Mailer, ReplyParams};
use crate::models::inquiry::{self, InboxView, ReplyForm};
use crate::templates_structs::{InboxItem, InboxTemplate, PageContext};

#[derive(Debug, Deserialize)]
pub struct InboxQuery {
    pub view: Option<String>,
    pub open: Option<i64>,
}

pub async fn list(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    session: Session,
    query: web::Query<InboxQuery>,
) -> Result<HttpResponse, AppError> {
    let view = InboxView::from_param(query.view.as_deref());
    let inquiries = inquiry::find_by_replied(&pool, view.replied()).await?;
    let (unreplied_count, replied_count) = inquiry::count_by_status(&pool).await?;

    let items = inquiries
        .into_iter()
        .map(|i| InboxItem { expanded: query.open == Some(i.id), inquiry: i })
        .collect();

    let ctx = PageContext::admin(&session, &config.site_name, "/admin/forms");
    render(InboxTemplate {
        ctx,
        items,
        viewing_replied: view.replied(),
        view: view.as_str().to_string(),
        unreplied_count,
        replied_count,
    })
}

/// Mark an inquiry replied, then email the reply to the visitor.
///
/// The flag is written before the email goes out and is not rolled back when
/// sending fails.
pub async fn reply(
    pool: web::Data<PgPool>,
    mailer: web::Data<Mailer>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<ReplyForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let id = path.into_inner();

    let found = inquiry::find_by_id(&pool, id).await?.ok_or(AppError::NotFound)?;
    if found.replied {
        set_flash(&session, "此表單已回覆");
        return Ok(see_other("/admin/forms?view=replied"));
    }

    let text = form.reply_text.trim();
    if text.is_empty() {
        set_flash(&session, "請輸入回覆內容");
        return Ok(see_other(&format!("/admin/forms?view=unreplied&open={id}")));
    }

    // Only the request that flips the flag sends the email
    if !inquiry::mark_replied(&pool, id).await? {
        set_flash(&session, "此表單已回覆");
        return Ok(see_other("/admin/forms?view=replied"));
    }

    let params = ReplyParams::for_inquiry(&found, mailer.from_name(), text);
    match mailer.send_reply(&params).await {
        Ok(()) => {
            log::info!("Reply to inquiry {id} sent to {}", found.email);
            set_flash(&session, "回覆信件已成功發送！");
        }
        Err(e) => {
            log::error!("Reply email for inquiry {id} failed: {e}");
            set_flash(&session, "回覆發送失敗。");
        }
    }

    Ok(see_other("/admin/forms?view=unreplied"))
}

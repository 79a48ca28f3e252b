use std::net::{IpAddr, Ipv4Addr};

use actix_session::Session;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;

use crate::auth::session::{get_admin_id, sign_in};
use crate::auth::{csrf, password, rate_limit::LoginThrottle};
use crate::config::Config;
use crate::errors::{AppError, render, see_other};
use crate::models::admin_user;
use crate::templates_structs::{LoginTemplate, PageContext};

const HOME: &str = "/admin/forms";

#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub csrf_token: String,
}

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

fn login_page_with(session: &Session, config: &Config, username: &str, error: Option<&str>) -> LoginTemplate {
    LoginTemplate {
        ctx: PageContext::public(session, &config.site_name, "/login"),
        username: username.to_string(),
        error: error.map(String::from),
    }
}

pub async fn login_page(
    config: web::Data<Config>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    if get_admin_id(&session).is_some() {
        return Ok(see_other(HOME));
    }
    render(login_page_with(&session, &config, "", None))
}

pub async fn login_submit(
    req: HttpRequest,
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    session: Session,
    form: web::Form<LoginForm>,
    throttle: web::Data<LoginThrottle>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    // Throttle check happens before touching the database
    let ip = req
        .peer_addr()
        .map(|addr| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));

    if throttle.is_blocked(ip) {
        log::warn!("Login from {ip} blocked after repeated failures");
        return render(login_page_with(
            &session,
            &config,
            &form.username,
            Some("登入失敗次數過多，請稍後再試。"),
        ));
    }

    let verified = match admin_user::find_by_username(&pool, &form.username).await? {
        Some(user) => match password::verify_password(&form.password, &user.password) {
            Ok(true) => Some(user),
            Ok(false) => None,
            Err(e) => {
                log::error!("Stored hash for '{}' is unusable: {e}", user.username);
                None
            }
        },
        None => None,
    };

    match verified {
        Some(user) => {
            throttle.clear(ip);
            sign_in(&session, user.id, &user.username)?;
            log::info!("Admin '{}' signed in", user.username);
            Ok(see_other(HOME))
        }
        None => {
            throttle.record_failure(ip);
            render(login_page_with(&session, &config, &form.username, Some("帳號或密碼錯誤")))
        }
    }
}

pub async fn logout(
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    session.purge();
    Ok(see_other("/login"))
}

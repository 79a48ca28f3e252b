//! Shared test infrastructure.
//!
//! Database tests use `#[sqlx::test]`, which hands each test a freshly
//! migrated database (requires `DATABASE_URL` to point at a Postgres server).
//! HTTP tests build the full app with `test_app!` and carry the session
//! cookie between requests with `SessionCookie`.

#![allow(dead_code, unused_macros)]

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use regex::Regex;
use sqlx::PgPool;

use tripdesk::config::{Config, EmailConfig};
use tripdesk::models::inquiry::{self, NewInquiry};

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASS: &str = "admin123";
pub const FROM_NAME: &str = "緯創旅遊";

// ============================================================================
// CONFIG
// ============================================================================

pub fn email_config(api_url: &str) -> EmailConfig {
    EmailConfig {
        api_url: api_url.to_string(),
        service_id: "service_test".to_string(),
        template_id: "template_test".to_string(),
        user_id: "user_test".to_string(),
        access_token: None,
        from_name: FROM_NAME.to_string(),
    }
}

pub fn test_config(email_api_url: &str) -> Config {
    Config {
        database_url: String::new(),
        bind_addr: "127.0.0.1:0".to_string(),
        session_key: None,
        admin_user: ADMIN_USER.to_string(),
        admin_password: ADMIN_PASS.to_string(),
        site_name: "緯創旅遊".to_string(),
        email: email_config(email_api_url),
    }
}

/// Build the full application around `pool`, sending email to `$email_url`.
macro_rules! test_app {
    ($pool:expr, $email_url:expr) => {{
        let config = common::test_config($email_url);
        let mailer = tripdesk::mailer::Mailer::new(config.email.clone());
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(tripdesk::routes::session_middleware(actix_web::cookie::Key::generate()))
                .app_data(actix_web::web::Data::new($pool.clone()))
                .app_data(actix_web::web::Data::new(config))
                .app_data(actix_web::web::Data::new(mailer))
                .app_data(actix_web::web::Data::new(tripdesk::auth::rate_limit::LoginThrottle::new()))
                .configure(tripdesk::routes::configure),
        )
        .await
    }};
}

// ============================================================================
// SESSION + CSRF
// ============================================================================

/// Latest session cookie seen in a response.
#[derive(Default)]
pub struct SessionCookie(Option<Cookie<'static>>);

impl SessionCookie {
    pub fn update<B>(&mut self, resp: &ServiceResponse<B>) {
        if let Some(c) = resp.response().cookies().find(|c| c.name() == "id") {
            self.0 = Some(c.into_owned());
        }
    }

    pub fn get(&self) -> Cookie<'static> {
        self.0.clone().expect("no session cookie captured yet")
    }
}

pub fn extract_csrf_token(html: &str) -> String {
    let re = Regex::new(r#"name="csrf_token" value="([0-9a-f]+)""#).expect("Failed to compile regex");
    re.captures(html)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .expect("CSRF token not found in HTML")
}

// ============================================================================
// FIXTURES
// ============================================================================

pub fn sample_inquiry(purpose: &str) -> NewInquiry {
    NewInquiry {
        purpose: purpose.to_string(),
        name: "王小明".to_string(),
        email: "visitor@example.com".to_string(),
        phone: "0912345678".to_string(),
        subject: "問題詢問".to_string(),
        message: "想了解京都五日遊的行程".to_string(),
    }
}

pub async fn insert_inquiry(pool: &PgPool, purpose: &str) -> i64 {
    inquiry::insert(pool, &sample_inquiry(purpose))
        .await
        .expect("Failed to insert inquiry")
}

pub async fn seed_admin(pool: &PgPool) {
    let hash = tripdesk::auth::password::hash_password(ADMIN_PASS).expect("Failed to hash password");
    tripdesk::db::seed_admin(pool, ADMIN_USER, &hash)
        .await
        .expect("Failed to seed admin");
}

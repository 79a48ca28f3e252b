use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{cookie::Key, web};

use crate::auth;
use crate::errors::see_other;
use crate::handlers;

pub fn session_middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_secure(false)
        .cookie_http_only(true)
        .build()
}

/// Public pages, the admin scope, and the 404 fallback.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Public routes
        .route("/", web::get().to(handlers::home_handlers::index))
        .route("/spot", web::get().to(handlers::home_handlers::detail))
        .route("/contact", web::get().to(handlers::contact_handlers::form))
        .route("/contact", web::post().to(handlers::contact_handlers::submit))
        .route("/login", web::get().to(handlers::auth_handlers::login_page))
        .route("/login", web::post().to(handlers::auth_handlers::login_submit))
        .route("/logout", web::post().to(handlers::auth_handlers::logout))
        // Operator pages
        .service(
            web::scope("/admin")
                .wrap(actix_web::middleware::from_fn(auth::middleware::require_admin))
                .route("", web::get().to(|| async { see_other("/admin/forms") }))
                .route("/forms", web::get().to(handlers::inbox_handlers::list))
                .route("/forms/{id}/reply", web::post().to(handlers::inbox_handlers::reply))
                .route("/spots", web::get().to(handlers::spot_handlers::list))
                .route("/spots/{id}/edit", web::get().to(handlers::spot_handlers::edit_form))
                .route("/spots/{id}", web::post().to(handlers::spot_handlers::update)),
        )
        .default_service(web::to(handlers::not_found));
}

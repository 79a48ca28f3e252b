pub mod auth_handlers;
pub mod contact_handlers;
pub mod home_handlers;
pub mod inbox_handlers;
pub mod spot_handlers;

use actix_web::HttpResponse;

/// Fallback for unknown paths.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(include_str!("../../templates/errors/404.html"))
}

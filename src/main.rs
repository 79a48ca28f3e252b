use actix_web::{App, HttpServer, cookie::Key, middleware, web};

use tripdesk::auth::{password, rate_limit::LoginThrottle};
use tripdesk::config::Config;
use tripdesk::mailer::Mailer;
use tripdesk::{db, routes};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = Config::from_env().map_err(std::io::Error::other)?;

    let pool = db::init_pool(&config.database_url).map_err(std::io::Error::other)?;
    db::run_migrations(&pool).await.map_err(std::io::Error::other)?;

    let admin_hash = password::hash_password(&config.admin_password).map_err(std::io::Error::other)?;
    db::seed_admin(&pool, &config.admin_user, &admin_hash)
        .await
        .map_err(std::io::Error::other)?;
    db::seed_spots(&pool).await.map_err(std::io::Error::other)?;

    if !config.email.is_complete() {
        log::warn!("EMAIL_SERVICE_ID / EMAIL_TEMPLATE_ID / EMAIL_USER_ID not all set; inquiry replies will fail to send");
    }

    // Cookie signing key; sessions survive restarts only with a fixed SESSION_KEY
    let secret_key = match config.session_key.as_deref() {
        Some(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Some(val) => {
            log::warn!("SESSION_KEY too short ({} bytes, need 64+), generating random key", val.len());
            Key::generate()
        }
        None => {
            log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
            Key::generate()
        }
    };

    let mailer = web::Data::new(Mailer::new(config.email.clone()));
    let throttle = web::Data::new(LoginThrottle::new());
    let bind_addr = config.bind_addr.clone();
    let config = web::Data::new(config);

    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        App::new()
            .wrap(routes::session_middleware(secret_key.clone()))
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .app_data(config.clone())
            .app_data(mailer.clone())
            .app_data(throttle.clone())
            .service(actix_files::Files::new("/static", "./static"))
            .configure(routes::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}

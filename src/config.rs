use std::env;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_EMAIL_API_URL: &str = "https://api.emailjs.com";
const DEFAULT_SITE_NAME: &str = "緯創旅遊";

/// Identifiers for the hosted email-sending service.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub api_url: String,
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub access_token: Option<String>,
    pub from_name: String,
}

impl EmailConfig {
    pub fn is_complete(&self) -> bool {
        !self.service_id.is_empty() && !self.template_id.is_empty() && !self.user_id.is_empty()
    }
}

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub session_key: Option<String>,
    pub admin_user: String,
    pub admin_password: String,
    pub site_name: String,
    pub email: EmailConfig,
}

impl Config {
    /// Load `.env` (if present) and read the environment.
    pub fn from_env() -> Result<Self, String> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(format!("Failed to read .env: {e}"));
            }
        }

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| "DATABASE_URL must be set".to_string())?;

        let admin_password = match env::var("ADMIN_PASSWORD") {
            Ok(val) if !val.is_empty() => val,
            _ => {
                log::warn!("No ADMIN_PASSWORD set, falling back to the default password");
                "admin123".to_string()
            }
        };

        let site_name = var_or("SITE_NAME", DEFAULT_SITE_NAME);

        let email = EmailConfig {
            api_url: var_or("EMAIL_API_URL", DEFAULT_EMAIL_API_URL),
            service_id: var_or("EMAIL_SERVICE_ID", ""),
            template_id: var_or("EMAIL_TEMPLATE_ID", ""),
            user_id: var_or("EMAIL_USER_ID", ""),
            access_token: env::var("EMAIL_ACCESS_TOKEN").ok().filter(|t| !t.is_empty()),
            from_name: var_or("EMAIL_FROM_NAME", &site_name),
        };

        Ok(Config {
            database_url,
            bind_addr: var_or("BIND_ADDR", DEFAULT_BIND_ADDR),
            session_key: env::var("SESSION_KEY").ok(),
            admin_user: var_or("ADMIN_USER", "admin"),
            admin_password,
            site_name,
            email,
        })
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

use actix_session::Session;

use crate::errors::AppError;

const ADMIN_ID: &str = "admin_id";
const ADMIN_NAME: &str = "admin_name";
const FLASH: &str = "flash";

pub fn get_admin_id(session: &Session) -> Option<i64> {
    session.get::<i64>(ADMIN_ID).unwrap_or(None)
}

pub fn get_admin_name(session: &Session) -> Result<String, AppError> {
    match session.get::<String>(ADMIN_NAME) {
        Ok(Some(name)) => Ok(name),
        Ok(None) => Err(AppError::Session("No admin in session".to_string())),
        Err(e) => Err(AppError::Session(e.to_string())),
    }
}

pub fn sign_in(session: &Session, id: i64, username: &str) -> Result<(), AppError> {
    session.renew();
    session
        .insert(ADMIN_ID, id)
        .and_then(|_| session.insert(ADMIN_NAME, username))
        .map_err(|e| AppError::Session(e.to_string()))
}

/// Queue a one-shot message for the next rendered page.
pub fn set_flash(session: &Session, message: &str) {
    if let Err(e) = session.insert(FLASH, message) {
        log::warn!("Could not store flash message: {e}");
    }
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>(FLASH).unwrap_or(None);
    if flash.is_some() {
        session.remove(FLASH);
    }
    flash
}

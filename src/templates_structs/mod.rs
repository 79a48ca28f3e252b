// Template context structures for Askama templates, organized by page group.

use actix_session::Session;

use crate::auth::csrf;
use crate::auth::session::{get_admin_name, take_flash};

/// Context shared by every page. `admin_name` is set on admin pages only.
pub struct PageContext {
    pub site_name: String,
    pub csrf_token: String,
    pub flash: Option<String>,
    pub admin_name: Option<String>,
    pub current_path: String,
}

impl PageContext {
    pub fn public(session: &Session, site_name: &str, current_path: &str) -> Self {
        PageContext {
            site_name: site_name.to_string(),
            csrf_token: csrf::get_or_create_token(session),
            flash: take_flash(session),
            admin_name: None,
            current_path: current_path.to_string(),
        }
    }

    pub fn admin(session: &Session, site_name: &str, current_path: &str) -> Self {
        let mut ctx = Self::public(session, site_name, current_path);
        ctx.admin_name = get_admin_name(session).ok();
        ctx
    }

    pub fn is_active(&self, prefix: &str) -> bool {
        self.current_path.starts_with(prefix)
    }
}

/// One `<option>` of a select box.
pub struct SelectOption {
    pub value: &'static str,
    pub selected: bool,
}

impl SelectOption {
    pub fn list(options: &[&'static str], current: &str) -> Vec<SelectOption> {
        options
            .iter()
            .map(|&value| SelectOption { value, selected: value == current.trim() })
            .collect()
    }
}

mod common;
mod contact;
mod inbox;
mod spot;

pub use self::common::LoginTemplate;
pub use self::contact::ContactTemplate;
pub use self::inbox::{InboxItem, InboxTemplate};
pub use self::spot::{HomeTemplate, ImageField, SpotDetailTemplate, SpotEditTemplate, SpotListTemplate};

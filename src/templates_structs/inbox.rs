use askama::Template;

use crate::models::inquiry::Inquiry;
use super::PageContext;

pub struct InboxItem {
    pub inquiry: Inquiry,
    pub expanded: bool,
}

#[derive(Template)]
#[template(path = "admin/inbox.html")]
pub struct InboxTemplate {
    pub ctx: PageContext,
    pub items: Vec<InboxItem>,
    pub viewing_replied: bool,
    pub view: String,
    pub unreplied_count: i64,
    pub replied_count: i64,
}

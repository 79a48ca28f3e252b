use chrono::{DateTime, Local, Utc};
use serde::Deserialize;

/// Contact categories offered by the public form.
pub const SUBJECT_OPTIONS: [&str; 3] = ["問題詢問", "合作提案", "給予建議"];

/// A submitted contact-form record.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Inquiry {
    pub id: i64,
    pub purpose: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub replied: bool,
    pub created_timestamp: Option<DateTime<Utc>>,
}

impl Inquiry {
    /// Creation time in server-local time, or a placeholder when unknown.
    pub fn created_display(&self) -> String {
        match self.created_timestamp {
            Some(ts) => ts.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string(),
            None => "未知時間".to_string(),
        }
    }

    /// Badge colour for the inquiry's category.
    pub fn category_color(&self) -> &'static str {
        match self.subject.as_str() {
            "問題詢問" => "#607B7D",
            "合作提案" => "#828E82",
            "給予建議" => "#AAAE8E",
            _ => "#9E9E9E",
        }
    }
}

/// Validated data for a new inquiry.
#[derive(Debug, Clone)]
pub struct NewInquiry {
    pub purpose: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

/// Form data posted by the public contact page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub purpose: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub csrf_token: String,
}

/// Which half of the inbox is being viewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InboxView {
    #[default]
    Unreplied,
    Replied,
}

impl InboxView {
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("replied") => InboxView::Replied,
            _ => InboxView::Unreplied,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InboxView::Unreplied => "unreplied",
            InboxView::Replied => "replied",
        }
    }

    pub fn replied(&self) -> bool {
        matches!(self, InboxView::Replied)
    }
}

/// Reply typed by an operator in the inbox.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplyForm {
    #[serde(default)]
    pub reply_text: String,
    pub csrf_token: String,
}

use crate::validate::{self, FieldErrors};
use super::types::{ContactForm, NewInquiry, SUBJECT_OPTIONS};

const PURPOSE_MAX_CHARS: usize = 20;

impl ContactForm {
    /// Field-level validation of a visitor inquiry.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        errors.check("purpose", validate::required(&self.purpose, "主旨是必填項"));
        errors.check(
            "purpose",
            validate::max_chars(&self.purpose, PURPOSE_MAX_CHARS, "主旨長度不可超過20字"),
        );

        errors.check("name", validate::required(&self.name, "姓名是必填項"));
        if !validate::is_person_name(&self.name) {
            errors.add("name", "請輸入中文或英文姓名");
        }

        errors.check("email", validate::required(&self.email, "電子郵件是必填項"));
        if !validate::is_contact_email(&self.email) {
            errors.add("email", "請輸入有效的電子郵件地址");
        }

        errors.check("phone", validate::required(&self.phone, "電話號碼是必填項"));
        if !validate::is_mobile_phone(&self.phone) {
            errors.add("phone", "請輸入有效的電話號碼 (09 開頭, 共 10 碼)");
        }

        errors.check("subject", validate::one_of(&self.subject, &SUBJECT_OPTIONS, "請選擇類別"));

        errors.check("message", validate::required(&self.message, "訊息內容是必填項"));

        errors
    }

    pub fn to_new_inquiry(&self) -> NewInquiry {
        NewInquiry {
            purpose: self.purpose.trim().to_string(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    /// Blank form carrying only the CSRF token, shown after a successful submit.
    pub fn reset(csrf_token: &str) -> Self {
        ContactForm {
            csrf_token: csrf_token.to_string(),
            ..Default::default()
        }
    }
}

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

static PERSON_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\x{4E00}-\x{9FA5}A-Za-z]+$").expect("valid name pattern"));

static CONTACT_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.(com|tw|org)$").expect("valid email pattern")
});

static MOBILE_PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^09[0-9]{8}$").expect("valid phone pattern"));

static IMAGE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^(ftp|http|https)://[^ "]+$"#).expect("valid url pattern"));

/// Per-field error messages. Only the first message for a field is kept,
/// so rules should be checked from most to least basic.
#[derive(Debug, Clone, Default)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_insert_with(|| message.into());
    }

    /// Record `message` under `field` when `check` yields one.
    pub fn check(&mut self, field: &str, check: Option<String>) {
        if let Some(message) = check {
            self.add(field, message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Required field: blank (after trimming) yields `message`.
pub fn required(value: &str, message: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(message.to_string())
    } else {
        None
    }
}

/// Length limit counted in characters, not bytes.
pub fn max_chars(value: &str, max: usize, message: &str) -> Option<String> {
    if value.trim().chars().count() > max {
        Some(message.to_string())
    } else {
        None
    }
}

/// Value must be one of a closed set of options.
pub fn one_of(value: &str, options: &[&str], message: &str) -> Option<String> {
    if options.contains(&value.trim()) {
        None
    } else {
        Some(message.to_string())
    }
}

// Pattern checks run on the raw value; surrounding whitespace fails them.

/// Chinese (CJK unified ideographs) or Latin letters only.
pub fn is_person_name(value: &str) -> bool {
    PERSON_NAME.is_match(value)
}

/// Email address on a .com, .tw or .org domain.
pub fn is_contact_email(value: &str) -> bool {
    CONTACT_EMAIL.is_match(value)
}

/// Ten ASCII digits starting with 09.
pub fn is_mobile_phone(value: &str) -> bool {
    MOBILE_PHONE.is_match(value)
}

/// ftp/http/https URL without spaces or double quotes.
pub fn is_url(value: &str) -> bool {
    IMAGE_URL.is_match(value)
}

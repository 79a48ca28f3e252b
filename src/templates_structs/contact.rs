use askama::Template;

use crate::models::inquiry::ContactForm;
use crate::validate::FieldErrors;
use super::{PageContext, SelectOption};

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub ctx: PageContext,
    pub form: ContactForm,
    pub errors: FieldErrors,
    pub subject_options: Vec<SelectOption>,
    /// Opens the "thank you" dialog.
    pub submitted: bool,
}

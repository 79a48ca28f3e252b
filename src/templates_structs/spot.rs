use askama::Template;

use crate::models::spot::{Spot, form::SpotForm};
use crate::validate::FieldErrors;
use super::{PageContext, SelectOption};

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub ctx: PageContext,
    pub spots: Vec<Spot>,
}

#[derive(Template)]
#[template(path = "spot_detail.html")]
pub struct SpotDetailTemplate {
    pub ctx: PageContext,
    pub spot: Spot,
}

#[derive(Template)]
#[template(path = "admin/spot_list.html")]
pub struct SpotListTemplate {
    pub ctx: PageContext,
    pub spots: Vec<Spot>,
}

/// One row of the image-URL field array.
pub struct ImageField {
    pub index: usize,
    pub url: String,
    pub error: Option<String>,
}

impl ImageField {
    pub fn list(urls: &[String], errors: &FieldErrors) -> Vec<ImageField> {
        urls.iter()
            .enumerate()
            .map(|(index, url)| ImageField {
                index,
                url: url.clone(),
                error: errors.get(&format!("img.{index}")).map(String::from),
            })
            .collect()
    }
}

#[derive(Template)]
#[template(path = "admin/spot_form.html")]
pub struct SpotEditTemplate {
    pub ctx: PageContext,
    pub spot_id: i64,
    pub form: SpotForm,
    pub images: Vec<ImageField>,
    pub categories: Vec<SelectOption>,
    pub errors: FieldErrors,
}

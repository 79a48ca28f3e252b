use crate::validate::{self, FieldErrors};
use super::types::{Spot, SpotUpdate, SPOT_CATEGORIES};

/// Fewest gallery images a spot may have.
pub const MIN_IMAGES: usize = 2;

const SUBTITLE_MAX_CHARS: usize = 6;
const BRIEF_MAX_CHARS: usize = 20;

const IMG_COUNT_MESSAGE: &str = "至少需要兩個圖片網址";

/// What the submit button on the edit page asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Save,
    AddImage,
    RemoveImage(usize),
}

impl FormAction {
    fn parse(value: &str) -> Self {
        match value {
            "add_img" => FormAction::AddImage,
            v => v
                .strip_prefix("remove_img:")
                .and_then(|i| i.parse().ok())
                .map(FormAction::RemoveImage)
                .unwrap_or(FormAction::Save),
        }
    }
}

/// Raw state of the spot edit form, kept as strings so invalid input can be
/// echoed back unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpotForm {
    pub title: String,
    pub subtitle: String,
    pub main_img: String,
    pub img: Vec<String>,
    pub area: String,
    pub country: String,
    pub city: String,
    pub brief: String,
    pub description: String,
    pub transportation: String,
    pub price: String,
    pub spot_category: String,
    pub confirmed: bool,
    pub csrf_token: String,
}

impl SpotForm {
    /// Pre-fill the form from the stored spot.
    pub fn from_spot(spot: &Spot) -> Self {
        SpotForm {
            title: spot.title.clone(),
            subtitle: spot.subtitle.clone(),
            main_img: spot.main_img.clone(),
            img: spot.img.clone(),
            area: spot.area.clone(),
            country: spot.country.clone(),
            city: spot.city.clone(),
            brief: spot.brief.clone(),
            description: spot.description.clone(),
            transportation: spot.transportation.clone(),
            price: spot.price.to_string(),
            spot_category: spot.spot_category.clone(),
            confirmed: false,
            csrf_token: String::new(),
        }
    }

    /// Build the form from urlencoded pairs. Repeated `img` keys become the
    /// image list in submission order.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> (Self, FormAction) {
        let mut form = SpotForm::default();
        let mut action = FormAction::Save;
        for (key, value) in pairs {
            match key.as_str() {
                "title" => form.title = value,
                "subtitle" => form.subtitle = value,
                "main_img" => form.main_img = value,
                "img" => form.img.push(value),
                "area" => form.area = value,
                "country" => form.country = value,
                "city" => form.city = value,
                "brief" => form.brief = value,
                "description" => form.description = value,
                "transportation" => form.transportation = value,
                "price" => form.price = value,
                "spot_category" => form.spot_category = value,
                "confirmation" => form.confirmed = !value.is_empty(),
                "csrf_token" => form.csrf_token = value,
                "action" => action = FormAction::parse(&value),
                _ => {}
            }
        }
        (form, action)
    }

    /// Apply an add/remove image request. Returns false for `Save`.
    pub fn apply_image_action(&mut self, action: FormAction) -> bool {
        match action {
            FormAction::AddImage => {
                self.img.push(String::new());
                true
            }
            FormAction::RemoveImage(index) => {
                if index < self.img.len() {
                    self.img.remove(index);
                }
                true
            }
            FormAction::Save => false,
        }
    }

    /// Image-count message, if the list is too short.
    pub fn image_count_error(&self) -> Option<String> {
        if self.img.len() < MIN_IMAGES {
            Some(IMG_COUNT_MESSAGE.to_string())
        } else {
            None
        }
    }

    fn parsed_price(&self) -> Option<i64> {
        self.price.trim().parse::<i64>().ok().filter(|p| *p >= 0)
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        errors.check("title", validate::required(&self.title, "完整標題是必填項目"));

        errors.check("subtitle", validate::required(&self.subtitle, "小標題是必填項目"));
        errors.check(
            "subtitle",
            validate::max_chars(&self.subtitle, SUBTITLE_MAX_CHARS, "小標題不得超過6個字"),
        );

        errors.check("area", validate::required(&self.area, "地區是必填項目"));
        errors.check("country", validate::required(&self.country, "國家是必填項目"));
        errors.check("city", validate::required(&self.city, "城市是必填項目"));

        errors.check("main_img", validate::required(&self.main_img, "主圖片網址是必填項目"));
        if !validate::is_url(&self.main_img) {
            errors.add("main_img", "無效的 URL");
        }

        for (i, url) in self.img.iter().enumerate() {
            let key = format!("img.{i}");
            errors.check(&key, validate::required(url, "圖片網址是必填項目"));
            if !validate::is_url(url) {
                errors.add(&key, "無效的 URL");
            }
        }
        errors.check("img", self.image_count_error());

        errors.check("brief", validate::required(&self.brief, "簡介是必填項目"));
        errors.check(
            "brief",
            validate::max_chars(&self.brief, BRIEF_MAX_CHARS, "簡介不得超過20個字"),
        );

        errors.check("description", validate::required(&self.description, "詳細介紹是必填項目"));
        errors.check(
            "transportation",
            validate::required(&self.transportation, "交通資訊是必填項目"),
        );

        if self.parsed_price().is_none() {
            errors.add("price", "價格是必填項目");
        }

        errors.check(
            "spot_category",
            validate::one_of(&self.spot_category, &SPOT_CATEGORIES, "類別是必填項目"),
        );

        if !self.confirmed {
            errors.add("confirmation", "請確認已檢查以上內容");
        }

        errors
    }

    /// Validate and convert into the stored representation.
    pub fn to_update(&self) -> Result<SpotUpdate, FieldErrors> {
        let errors = self.validate();
        let price = match self.parsed_price() {
            Some(p) if errors.is_empty() => p,
            _ => return Err(errors),
        };
        Ok(SpotUpdate {
            title: self.title.trim().to_string(),
            subtitle: self.subtitle.trim().to_string(),
            main_img: self.main_img.trim().to_string(),
            img: self.img.iter().map(|u| u.trim().to_string()).collect(),
            area: self.area.trim().to_string(),
            country: self.country.trim().to_string(),
            city: self.city.trim().to_string(),
            brief: self.brief.trim().to_string(),
            description: self.description.trim().to_string(),
            transportation: self.transportation.trim().to_string(),
            price,
            spot_category: self.spot_category.trim().to_string(),
        })
    }
}

use serde::Deserialize;

/// Categories a spot can be filed under.
pub const SPOT_CATEGORIES: [&str; 5] = ["自然風景", "博物館 & 美術館", "樂園", "歷史景點", "特色建築"];

/// A travel destination record.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Spot {
    pub id: i64,
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
    pub price: i64,
    pub spot_category: String,
    pub click_count: i64,
    pub is_selected_for_carousel: bool,
    pub hidden: bool,
}

/// Editable content of a spot. Popularity and visibility flags are not
/// part of it, so an edit never touches them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpotUpdate {
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
    pub price: i64,
    pub spot_category: String,
}

/// A spot to insert, as loaded from the seed file.
#[derive(Debug, Clone, Deserialize)]
pub struct NewSpot {
    #[serde(flatten)]
    pub fields: SpotUpdate,
    #[serde(default)]
    pub click_count: i64,
    #[serde(default)]
    pub is_selected_for_carousel: bool,
    #[serde(default)]
    pub hidden: bool,
}

/// Query string of the public detail page: `/spot?id=<id>`.
#[derive(Debug, Deserialize)]
pub struct SpotQuery {
    pub id: Option<i64>,
}

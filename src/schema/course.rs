use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::patch::{null_as_absent, Patch};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseCreateRequest{
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub image_uri: Option<String>,
    #[serde(default)]
    pub image_header_uri: Option<String>,
    #[serde(default)]
    pub is_bestseller: bool,
    #[serde(default)]
    pub is_digital: bool,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub ingress: Option<String>,
    #[serde(default)]
    pub star_rating: Decimal,
    #[serde(default)]
    pub reviews: Option<String>,
    #[serde(default)]
    pub likes_in_percent: Option<String>,
    #[serde(default)]
    pub likes: Option<String>,
    #[serde(default)]
    pub hours: Option<String>,
    #[serde(default)]
    pub authors: Option<Vec<AuthorRequest>>,
    #[serde(default)]
    pub prices: Option<PricesRequest>,
    #[serde(default)]
    pub content: Option<ContentRequest>,
}

/// Update for the course identified by `id`. Fields left out of the payload
/// keep their stored values; `content` and `authors` replace their stored
/// counterparts wholesale when given.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseUpdateRequest{
    pub id: String,
    #[serde(default)]
    pub image_uri: Patch<Option<String>>,
    #[serde(default)]
    pub image_header_uri: Patch<Option<String>>,
    #[serde(default, deserialize_with = "null_as_absent")]
    pub is_bestseller: Patch<bool>,
    #[serde(default, deserialize_with = "null_as_absent")]
    pub is_digital: Patch<bool>,
    #[serde(default, deserialize_with = "null_as_absent")]
    pub categories: Patch<Vec<String>>,
    #[serde(default)]
    pub title: Patch<Option<String>>,
    #[serde(default)]
    pub ingress: Patch<Option<String>>,
    #[serde(default, deserialize_with = "null_as_absent")]
    pub star_rating: Patch<Decimal>,
    #[serde(default)]
    pub reviews: Patch<Option<String>>,
    #[serde(default)]
    pub likes_in_percent: Patch<Option<String>>,
    #[serde(default)]
    pub likes: Patch<Option<String>>,
    #[serde(default)]
    pub hours: Patch<Option<String>>,
    #[serde(default, deserialize_with = "null_as_absent")]
    pub authors: Patch<Vec<AuthorRequest>>,
    #[serde(default, deserialize_with = "null_as_absent")]
    pub prices: Patch<PricesRequest>,
    #[serde(default, deserialize_with = "null_as_absent")]
    pub content: Patch<ContentRequest>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthorRequest{
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRequest{
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub includes: Option<Vec<String>>,
    #[serde(default)]
    pub program_details: Option<Vec<ProgramDetailItemRequest>>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PricesRequest{
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub discount: Decimal,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProgramDetailItemRequest{
    pub id: i32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

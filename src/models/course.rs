use async_graphql::SimpleObject;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CURRENCY: &str = "USD";

/// A course together with everything it owns. Persisted and returned as one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct Course{
    pub id: String,
    pub image_uri: Option<String>,
    pub image_header_uri: Option<String>,
    pub is_bestseller: bool,
    pub is_digital: bool,
    pub categories: Vec<String>,
    pub title: Option<String>,
    pub ingress: Option<String>,
    pub star_rating: Decimal,
    pub reviews: Option<String>,
    pub likes_in_percent: Option<String>,
    pub likes: Option<String>,
    pub hours: Option<String>,
    pub authors: Vec<Author>,
    pub prices: Prices,
    pub content: Content,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct Content{
    pub description: Option<String>,
    pub includes: Vec<String>,
    pub program_details: Vec<ProgramDetailItem>,
}

/// `id` is assigned by the caller and is not unique within a content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct ProgramDetailItem{
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
pub struct Author{
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
pub struct Prices{
    pub currency: Option<String>,
    pub price: Decimal,
    pub discount: Decimal,
}

impl Default for Prices{
    fn default() -> Self {
        Prices{
            currency: Some(DEFAULT_CURRENCY.to_string()),
            price: Decimal::ZERO,
            discount: Decimal::ZERO,
        }
    }
}

#[cfg(test)]
mod tests{
    use super::*;

    #[test]
    fn test_default_prices(){
        let prices = Prices::default();

        assert_eq!(prices.currency.as_deref(), Some("USD"));
        assert_eq!(prices.price, Decimal::ZERO);
        assert_eq!(prices.discount, Decimal::ZERO);
    }

    #[test]
    fn test_course_serializes_camel_case(){
        let course = Course{
            id: "c1".to_string(),
            image_uri: None,
            image_header_uri: Some("header.png".to_string()),
            is_bestseller: true,
            is_digital: false,
            categories: vec!["rust".to_string()],
            title: Some("Intro".to_string()),
            ingress: None,
            star_rating: Decimal::new(45, 1),
            reviews: None,
            likes_in_percent: None,
            likes: None,
            hours: None,
            authors: vec![Author{name: Some("Ferris".to_string())}],
            prices: Prices::default(),
            content: Content{
                description: None,
                includes: vec![],
                program_details: vec![ProgramDetailItem{id: 1, title: Some("A".to_string()), description: None}],
            },
        };

        let json = serde_json::to_value(&course).unwrap();

        assert_eq!(json["imageHeaderUri"], "header.png");
        assert_eq!(json["isBestseller"], true);
        assert_eq!(json["content"]["programDetails"][0]["id"], 1);
        assert_eq!(json["authors"][0]["name"], "Ferris");
    }
}

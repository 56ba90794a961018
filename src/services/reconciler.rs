//! Turns course requests into the aggregate state that gets persisted.
//!
//! Nothing in here touches storage. `create` builds a brand new aggregate,
//! `merge` folds an update into one that was loaded from the store. Owned
//! collections are never diffed: a present list replaces the stored one.

use crate::{
    models::course::{Author, Content, Course, Prices, ProgramDetailItem},
    schema::course::{AuthorRequest, ContentRequest, CourseCreateRequest, CourseUpdateRequest, PricesRequest, ProgramDetailItemRequest},
};

/// Builds a new aggregate under `id`. Missing collections become empty and
/// missing prices fall back to `Prices::default()`.
pub fn create(request: CourseCreateRequest, id: String) -> Course{
    Course{
        id,
        image_uri: request.image_uri,
        image_header_uri: request.image_header_uri,
        is_bestseller: request.is_bestseller,
        is_digital: request.is_digital,
        categories: request.categories.unwrap_or_default(),
        title: request.title,
        ingress: request.ingress,
        star_rating: request.star_rating,
        reviews: request.reviews,
        likes_in_percent: request.likes_in_percent,
        likes: request.likes,
        hours: request.hours,
        authors: request.authors.map(authors).unwrap_or_default(),
        prices: request.prices.map(prices).unwrap_or_default(),
        content: request.content.map(content).unwrap_or_default(),
    }
}

/// Folds `request` into `existing`.
///
/// Scalars present on the request overwrite, explicit nulls included. A
/// present `content` overwrites description and includes and swaps in a
/// fresh program detail list; present `authors` and `prices` replace theirs.
pub fn merge(mut existing: Course, request: CourseUpdateRequest) -> Course{
    request.image_uri.apply_to(&mut existing.image_uri);
    request.image_header_uri.apply_to(&mut existing.image_header_uri);
    request.is_bestseller.apply_to(&mut existing.is_bestseller);
    request.is_digital.apply_to(&mut existing.is_digital);
    request.categories.apply_to(&mut existing.categories);
    request.title.apply_to(&mut existing.title);
    request.ingress.apply_to(&mut existing.ingress);
    request.star_rating.apply_to(&mut existing.star_rating);
    request.reviews.apply_to(&mut existing.reviews);
    request.likes_in_percent.apply_to(&mut existing.likes_in_percent);
    request.likes.apply_to(&mut existing.likes);
    request.hours.apply_to(&mut existing.hours);

    request.content.map(content).apply_to(&mut existing.content);
    request.authors.map(authors).apply_to(&mut existing.authors);
    request.prices.map(prices).apply_to(&mut existing.prices);

    existing
}

fn content(request: ContentRequest) -> Content{
    Content{
        description: request.description,
        includes: request.includes.unwrap_or_default(),
        program_details: request.program_details
            .unwrap_or_default()
            .into_iter()
            .map(program_detail)
            .collect(),
    }
}

fn program_detail(request: ProgramDetailItemRequest) -> ProgramDetailItem{
    ProgramDetailItem{
        id: request.id,
        title: request.title,
        description: request.description,
    }
}

fn authors(request: Vec<AuthorRequest>) -> Vec<Author>{
    request.into_iter().map(|author| Author{name: author.name}).collect()
}

fn prices(request: PricesRequest) -> Prices{
    Prices{
        currency: request.currency,
        price: request.price,
        discount: request.discount,
    }
}

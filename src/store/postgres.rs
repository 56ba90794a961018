use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgConnection, Pool, Postgres};

use crate::{
    errors::StoreError,
    models::course::{Author, Content, Course, Prices, ProgramDetailItem},
};

use super::CourseStore;

/// Course aggregates over the tables in `sql/schema.sql`.
pub struct PostgresCourseStore{
    pool: Pool<Postgres>,
}

impl PostgresCourseStore{
    pub fn new(pool: Pool<Postgres>) -> Self{
        PostgresCourseStore{pool}
    }
}

#[derive(FromRow)]
struct CourseRow{
    id: String,
    image_uri: Option<String>,
    image_header_uri: Option<String>,
    is_bestseller: bool,
    is_digital: bool,
    categories: Vec<String>,
    title: Option<String>,
    ingress: Option<String>,
    star_rating: Decimal,
    reviews: Option<String>,
    likes_in_percent: Option<String>,
    likes: Option<String>,
    hours: Option<String>,
}

#[derive(FromRow)]
struct PricesRow{
    course_id: String,
    currency: Option<String>,
    price: Decimal,
    discount: Decimal,
}

#[derive(FromRow)]
struct ContentRow{
    course_id: String,
    description: Option<String>,
    includes: Vec<String>,
}

#[derive(FromRow)]
struct ProgramDetailRow{
    course_id: String,
    id: i32,
    title: Option<String>,
    description: Option<String>,
}

#[derive(FromRow)]
struct AuthorRow{
    course_id: String,
    name: Option<String>,
}

impl CourseRow{
    fn into_course(self, prices: Prices, content: Content, authors: Vec<Author>) -> Course{
        Course{
            id: self.id,
            image_uri: self.image_uri,
            image_header_uri: self.image_header_uri,
            is_bestseller: self.is_bestseller,
            is_digital: self.is_digital,
            categories: self.categories,
            title: self.title,
            ingress: self.ingress,
            star_rating: self.star_rating,
            reviews: self.reviews,
            likes_in_percent: self.likes_in_percent,
            likes: self.likes,
            hours: self.hours,
            authors,
            prices,
            content,
        }
    }
}

const SELECT_COURSES: &str = r#"
    SELECT id, image_uri, image_header_uri, is_bestseller, is_digital, categories,
           title, ingress, star_rating, reviews, likes_in_percent, likes, hours
    FROM courses
"#;

/// Loads the owned rows for `rows` and assembles full aggregates, keeping the
/// order of `rows`.
async fn load_aggregates(conn: &mut PgConnection, rows: Vec<CourseRow>) -> Result<Vec<Course>, sqlx::Error>{
    if rows.is_empty(){
        return Ok(Vec::new());
    }

    let ids: Vec<String> = rows.iter().map(|row| row.id.clone()).collect();

    let mut prices: HashMap<String, Prices> = sqlx::query_as::<_, PricesRow>(
        r#"
            SELECT course_id, currency, price, discount FROM prices
            WHERE course_id = ANY($1)
        "#,
    )
    .bind(&ids)
    .fetch_all(&mut *conn)
    .await?
    .into_iter()
    .map(|row| (row.course_id, Prices{currency: row.currency, price: row.price, discount: row.discount}))
    .collect();

    let mut contents: HashMap<String, Content> = sqlx::query_as::<_, ContentRow>(
        r#"
            SELECT course_id, description, includes FROM contents
            WHERE course_id = ANY($1)
        "#,
    )
    .bind(&ids)
    .fetch_all(&mut *conn)
    .await?
    .into_iter()
    .map(|row| (row.course_id, Content{description: row.description, includes: row.includes, program_details: Vec::new()}))
    .collect();

    let program_details = sqlx::query_as::<_, ProgramDetailRow>(
        r#"
            SELECT course_id, id, title, description FROM program_details
            WHERE course_id = ANY($1)
            ORDER BY row_id
        "#,
    )
    .bind(&ids)
    .fetch_all(&mut *conn)
    .await?;

    for row in program_details{
        contents.entry(row.course_id).or_default().program_details.push(ProgramDetailItem{
            id: row.id,
            title: row.title,
            description: row.description,
        });
    }

    let mut authors: HashMap<String, Vec<Author>> = HashMap::new();
    let author_rows = sqlx::query_as::<_, AuthorRow>(
        r#"
            SELECT course_id, name FROM authors
            WHERE course_id = ANY($1)
            ORDER BY row_id
        "#,
    )
    .bind(&ids)
    .fetch_all(&mut *conn)
    .await?;

    for row in author_rows{
        authors.entry(row.course_id).or_default().push(Author{name: row.name});
    }

    Ok(rows.into_iter().map(|row| {
        let prices = prices.remove(&row.id).unwrap_or_default();
        let content = contents.remove(&row.id).unwrap_or_default();
        let authors = authors.remove(&row.id).unwrap_or_default();
        row.into_course(prices, content, authors)
    }).collect())
}

/// Rewrites everything `course` owns. Program details and authors are dropped
/// and inserted again from `course`.
async fn write_owned(conn: &mut PgConnection, course: &Course) -> Result<(), sqlx::Error>{
    sqlx::query(
        r#"
            INSERT INTO prices (course_id, currency, price, discount)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (course_id) DO UPDATE
            SET currency = EXCLUDED.currency, price = EXCLUDED.price, discount = EXCLUDED.discount
        "#,
    )
    .bind(&course.id)
    .bind(&course.prices.currency)
    .bind(course.prices.price)
    .bind(course.prices.discount)
    .execute(&mut *conn)
    .await?;

    sqlx::query(
        r#"
            INSERT INTO contents (course_id, description, includes)
            VALUES ($1, $2, $3)
            ON CONFLICT (course_id) DO UPDATE
            SET description = EXCLUDED.description, includes = EXCLUDED.includes
        "#,
    )
    .bind(&course.id)
    .bind(&course.content.description)
    .bind(&course.content.includes)
    .execute(&mut *conn)
    .await?;

    sqlx::query("DELETE FROM program_details WHERE course_id = $1")
        .bind(&course.id)
        .execute(&mut *conn)
        .await?;

    for item in &course.content.program_details{
        sqlx::query(
            r#"
                INSERT INTO program_details (course_id, id, title, description)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&course.id)
        .bind(item.id)
        .bind(&item.title)
        .bind(&item.description)
        .execute(&mut *conn)
        .await?;
    }

    sqlx::query("DELETE FROM authors WHERE course_id = $1")
        .bind(&course.id)
        .execute(&mut *conn)
        .await?;

    for author in &course.authors{
        sqlx::query("INSERT INTO authors (course_id, name) VALUES ($1, $2)")
            .bind(&course.id)
            .bind(&author.name)
            .execute(&mut *conn)
            .await?;
    }

    Ok(())
}

#[async_trait]
impl CourseStore for PostgresCourseStore{
    async fn find_by_id(&self, id: &str) -> Result<Option<Course>, StoreError>{
        let mut conn = self.pool.acquire().await?;

        let row = sqlx::query_as::<_, CourseRow>(&format!("{SELECT_COURSES} WHERE id = $1"))
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(load_aggregates(&mut conn, vec![row]).await?.pop())
    }

    async fn find_all(&self) -> Result<Vec<Course>, StoreError>{
        let mut conn = self.pool.acquire().await?;

        let rows = sqlx::query_as::<_, CourseRow>(&format!("{SELECT_COURSES} ORDER BY position"))
            .fetch_all(&mut *conn)
            .await?;

        Ok(load_aggregates(&mut conn, rows).await?)
    }

    async fn find_by_ids(&self, ids: &[String]) -> Result<Vec<Course>, StoreError>{
        let mut conn = self.pool.acquire().await?;

        let rows = sqlx::query_as::<_, CourseRow>(&format!("{SELECT_COURSES} WHERE id = ANY($1) ORDER BY position"))
            .bind(ids)
            .fetch_all(&mut *conn)
            .await?;

        Ok(load_aggregates(&mut conn, rows).await?)
    }

    async fn insert(&self, course: &Course) -> Result<(), StoreError>{
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
                INSERT INTO courses (id, image_uri, image_header_uri, is_bestseller, is_digital, categories,
                                     title, ingress, star_rating, reviews, likes_in_percent, likes, hours)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(&course.id)
        .bind(&course.image_uri)
        .bind(&course.image_header_uri)
        .bind(course.is_bestseller)
        .bind(course.is_digital)
        .bind(&course.categories)
        .bind(&course.title)
        .bind(&course.ingress)
        .bind(course.star_rating)
        .bind(&course.reviews)
        .bind(&course.likes_in_percent)
        .bind(&course.likes)
        .bind(&course.hours)
        .execute(&mut *tx)
        .await?;

        write_owned(&mut tx, course).await?;

        tx.commit().await?;
        Ok(())
    }

    async fn save(&self, course: &Course) -> Result<u64, StoreError>{
        let mut tx = self.pool.begin().await?;

        // postgres counts matched rows, so an unchanged course still reports 1
        let matched = sqlx::query(
            r#"
                UPDATE courses
                SET image_uri = $2, image_header_uri = $3, is_bestseller = $4, is_digital = $5,
                    categories = $6, title = $7, ingress = $8, star_rating = $9, reviews = $10,
                    likes_in_percent = $11, likes = $12, hours = $13
                WHERE id = $1
            "#,
        )
        .bind(&course.id)
        .bind(&course.image_uri)
        .bind(&course.image_header_uri)
        .bind(course.is_bestseller)
        .bind(course.is_digital)
        .bind(&course.categories)
        .bind(&course.title)
        .bind(&course.ingress)
        .bind(course.star_rating)
        .bind(&course.reviews)
        .bind(&course.likes_in_percent)
        .bind(&course.likes)
        .bind(&course.hours)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if matched == 0{
            return Ok(0);
        }

        write_owned(&mut tx, course).await?;

        tx.commit().await?;
        Ok(matched)
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError>{
        let mut tx = self.pool.begin().await?;

        let deleted = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;
        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests{
    use dotenv::dotenv;
    use sqlx::postgres::PgPoolOptions;

    use super::*;
    use crate::{schema::course::{AuthorRequest, ContentRequest, CourseCreateRequest, ProgramDetailItemRequest}, services::reconciler};

    async fn store() -> (PostgresCourseStore, Pool<Postgres>){
        dotenv().ok();

        let database_url = std::env::var("DATABASE_URL").expect("DATABASE URL must be set");

        let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await
        .expect("Cant connect to the database");

        sqlx::raw_sql(include_str!("../../sql/schema.sql"))
            .execute(&pool)
            .await
            .expect("Cant create the course tables");

        (PostgresCourseStore::new(pool.clone()), pool)
    }

    #[actix_web::test]
    #[ignore = "needs a postgres DATABASE_URL"]
    async fn test_aggregate_round_trip(){
        let (store, pool) = store().await;

        let course = reconciler::create(CourseCreateRequest{
            title: Some("Postgres round trip".to_string()),
            categories: Some(vec!["db".to_string()]),
            authors: Some(vec![AuthorRequest{name: Some("Ferris".to_string())}]),
            content: Some(ContentRequest{
                description: Some("tables".to_string()),
                includes: None,
                program_details: Some(vec![
                    ProgramDetailItemRequest{id: 2, title: Some("B".to_string()), description: None},
                    ProgramDetailItemRequest{id: 1, title: Some("A".to_string()), description: None},
                ]),
            }),
            ..Default::default()
        }, "pg-round-trip".to_string());

        store.insert(&course).await.unwrap();
        assert_eq!(store.find_by_id(&course.id).await.unwrap(), Some(course.clone()));

        let mut changed = course.clone();
        changed.authors.clear();
        changed.content.program_details.truncate(1);
        assert_eq!(store.save(&changed).await.unwrap(), 1);
        assert_eq!(store.save(&changed).await.unwrap(), 1);
        assert_eq!(store.find_by_id(&course.id).await.unwrap(), Some(changed));

        assert!(store.delete(&course.id).await.unwrap());
        assert!(!store.delete(&course.id).await.unwrap());

        let orphans: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM program_details WHERE course_id = $1")
            .bind(&course.id)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(orphans, 0);
    }
}

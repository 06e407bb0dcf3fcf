//! Shared test fixtures: an in-memory database with the schema applied and
//! factories for the rows the hotel endpoints read.

use std::sync::atomic::{AtomicI64, Ordering};

use jsonwebtoken::{encode, EncodingKey, Header};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use event_hotels_api::auth::Claims;
use event_hotels_api::config::Config;
use event_hotels_api::db::MIGRATOR;
use event_hotels_api::models::hotel::Hotel;
use event_hotels_api::models::room::Room;
use event_hotels_api::models::ticket::TicketStatus;

pub const JWT_SECRET: &str = "super-secret-test-key";

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: JWT_SECRET.to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
    }
}

/// A single-connection pool, so every query lands on the same in-memory
/// database.
pub async fn setup_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory database");
    MIGRATOR.run(&pool).await.expect("migrations");
    pool
}

macro_rules! init_app {
    ($pool:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($pool.clone()))
                .app_data(actix_web::web::Data::new(crate::common::test_config()))
                .configure(event_hotels_api::app_config),
        )
        .await
    };
}
pub(crate) use init_app;

static EMAIL_SEQ: AtomicI64 = AtomicI64::new(1);

pub async fn create_user(pool: &SqlitePool) -> i64 {
    let n = EMAIL_SEQ.fetch_add(1, Ordering::Relaxed);
    sqlx::query_scalar("INSERT INTO users (email, password) VALUES (?, ?) RETURNING id")
        .bind(format!("attendee{n}@example.com"))
        .bind("hashed-password")
        .fetch_one(pool)
        .await
        .expect("insert user")
}

pub fn sign_token(user_id: i64) -> String {
    encode(
        &Header::default(),
        &Claims { user_id },
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .expect("sign token")
}

/// Token the auth layer accepts: signed with the test secret and backed by a
/// session row.
pub async fn generate_valid_token(pool: &SqlitePool, user_id: i64) -> String {
    let token = sign_token(user_id);
    sqlx::query("INSERT INTO sessions (user_id, token) VALUES (?, ?)")
        .bind(user_id)
        .bind(&token)
        .execute(pool)
        .await
        .expect("insert session");
    token
}

pub async fn create_enrollment(pool: &SqlitePool, user_id: i64) -> i64 {
    sqlx::query_scalar("INSERT INTO enrollments (user_id) VALUES (?) RETURNING id")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .expect("insert enrollment")
}

pub async fn create_ticket_type(pool: &SqlitePool, is_remote: bool, includes_hotel: bool) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO ticket_types (name, price, is_remote, includes_hotel) \
         VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind("Presencial + Hotel")
    .bind(60_000_i64)
    .bind(is_remote)
    .bind(includes_hotel)
    .fetch_one(pool)
    .await
    .expect("insert ticket type")
}

pub async fn create_ticket(
    pool: &SqlitePool,
    enrollment_id: i64,
    ticket_type_id: i64,
    status: TicketStatus,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO tickets (ticket_type_id, enrollment_id, status) \
         VALUES (?, ?, ?) RETURNING id",
    )
    .bind(ticket_type_id)
    .bind(enrollment_id)
    .bind(status)
    .fetch_one(pool)
    .await
    .expect("insert ticket")
}

pub async fn create_hotel(pool: &SqlitePool) -> Hotel {
    sqlx::query_as::<_, Hotel>(
        "INSERT INTO hotels (name, image) VALUES (?, ?) RETURNING *",
    )
    .bind("Driven Resort")
    .bind("https://example.com/hotel.jpg")
    .fetch_one(pool)
    .await
    .expect("insert hotel")
}

pub async fn create_room(pool: &SqlitePool, hotel_id: i64) -> Room {
    sqlx::query_as::<_, Room>(
        "INSERT INTO rooms (name, capacity, hotel_id) VALUES (?, ?, ?) RETURNING *",
    )
    .bind("101")
    .bind(3_i64)
    .bind(hotel_id)
    .fetch_one(pool)
    .await
    .expect("insert room")
}

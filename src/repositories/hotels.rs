//! Read-only lookups backing the hotel endpoints. No writes originate here.

use sqlx::SqlitePool;

use crate::models::enrollment::Enrollment;
use crate::models::hotel::Hotel;
use crate::models::room::Room;
use crate::models::ticket::{Ticket, TicketType};

pub async fn find_enrollment_by_user(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Option<Enrollment>, sqlx::Error> {
    sqlx::query_as::<_, Enrollment>("SELECT * FROM enrollments WHERE user_id = ?")
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

pub async fn find_ticket_by_enrollment(
    pool: &SqlitePool,
    enrollment_id: i64,
) -> Result<Option<Ticket>, sqlx::Error> {
    sqlx::query_as::<_, Ticket>("SELECT * FROM tickets WHERE enrollment_id = ?")
        .bind(enrollment_id)
        .fetch_optional(pool)
        .await
}

pub async fn find_ticket_type(
    pool: &SqlitePool,
    ticket_type_id: i64,
) -> Result<Option<TicketType>, sqlx::Error> {
    sqlx::query_as::<_, TicketType>("SELECT * FROM ticket_types WHERE id = ?")
        .bind(ticket_type_id)
        .fetch_optional(pool)
        .await
}

pub async fn find_hotel_by_id(
    pool: &SqlitePool,
    hotel_id: i64,
) -> Result<Option<Hotel>, sqlx::Error> {
    sqlx::query_as::<_, Hotel>("SELECT * FROM hotels WHERE id = ?")
        .bind(hotel_id)
        .fetch_optional(pool)
        .await
}

pub async fn find_hotels(pool: &SqlitePool) -> Result<Vec<Hotel>, sqlx::Error> {
    sqlx::query_as::<_, Hotel>("SELECT * FROM hotels")
        .fetch_all(pool)
        .await
}

pub async fn find_rooms_by_hotel(
    pool: &SqlitePool,
    hotel_id: i64,
) -> Result<Vec<Room>, sqlx::Error> {
    sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE hotel_id = ?")
        .bind(hotel_id)
        .fetch_all(pool)
        .await
}

//! Decides whether a caller may view hotel data: their enrollment must hold a
//! ticket that is paid for an in-person, hotel-inclusive category. Lookups are
//! scoped to the caller; a verdict about one user never depends on another
//! user's ticket.

use sqlx::SqlitePool;

use crate::errors::ApiError;
use crate::models::hotel::Hotel;
use crate::models::ticket::{Ticket, TicketStatus, TicketType};
use crate::repositories::hotels as hotels_repository;

/// Listing variant: no target hotel involved.
pub async fn ensure_hotel_access(pool: &SqlitePool, user_id: i64) -> Result<(), ApiError> {
    let enrollment = hotels_repository::find_enrollment_by_user(pool, user_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    let ticket = hotels_repository::find_ticket_by_enrollment(pool, enrollment.id)
        .await?
        .ok_or(ApiError::NotFound)?;
    let ticket_type = hotels_repository::find_ticket_type(pool, ticket.ticket_type_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    if requires_payment(&ticket, &ticket_type) {
        return Err(ApiError::PaymentRequired);
    }

    Ok(())
}

/// Single-hotel variant. The hotel lookup runs before the payment rule, so a
/// nonexistent hotel id is a not-found even for an ineligible ticket. Returns
/// the hotel row so the caller does not refetch it.
pub async fn ensure_hotel_access_for(
    pool: &SqlitePool,
    user_id: i64,
    hotel_id: i64,
) -> Result<Hotel, ApiError> {
    let enrollment = hotels_repository::find_enrollment_by_user(pool, user_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    let ticket = hotels_repository::find_ticket_by_enrollment(pool, enrollment.id)
        .await?
        .ok_or(ApiError::NotFound)?;
    let hotel = hotels_repository::find_hotel_by_id(pool, hotel_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    let ticket_type = hotels_repository::find_ticket_type(pool, ticket.ticket_type_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    if requires_payment(&ticket, &ticket_type) {
        return Err(ApiError::PaymentRequired);
    }

    Ok(hotel)
}

/// A reserved ticket, a remote-only category, or a category without hotel
/// access all block the read. PENDING is not rejected here.
fn requires_payment(ticket: &Ticket, ticket_type: &TicketType) -> bool {
    ticket.status == TicketStatus::Reserved || ticket_type.is_remote || !ticket_type.includes_hotel
}

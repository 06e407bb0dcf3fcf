use sqlx::SqlitePool;

use crate::errors::ApiError;
use crate::models::hotel::{Hotel, HotelWithRooms};
use crate::repositories::hotels as hotels_repository;
use crate::services::eligibility;

/// All hotels, for an eligible caller. An empty store is reported as
/// not-found rather than an empty listing.
pub async fn list_hotels(pool: &SqlitePool, user_id: i64) -> Result<Vec<Hotel>, ApiError> {
    eligibility::ensure_hotel_access(pool, user_id).await?;

    let hotels = hotels_repository::find_hotels(pool).await?;
    if hotels.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(hotels)
}

/// One hotel with its rooms embedded, for an eligible caller.
pub async fn get_hotel_rooms(
    pool: &SqlitePool,
    user_id: i64,
    hotel_id: i64,
) -> Result<HotelWithRooms, ApiError> {
    let hotel = eligibility::ensure_hotel_access_for(pool, user_id, hotel_id).await?;
    let rooms = hotels_repository::find_rooms_by_hotel(pool, hotel_id).await?;

    Ok(HotelWithRooms::new(hotel, rooms))
}

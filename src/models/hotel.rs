use serde::{Deserialize, Serialize};

use crate::models::room::Room;

#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Single-hotel response: the hotel's own attributes with its rooms embedded,
/// in the persistence layer's default order.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HotelWithRooms {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "Rooms")]
    pub rooms: Vec<Room>,
}

impl HotelWithRooms {
    pub fn new(hotel: Hotel, rooms: Vec<Room>) -> Self {
        Self {
            id: hotel.id,
            name: hotel.name,
            image: hotel.image,
            created_at: hotel.created_at,
            updated_at: hotel.updated_at,
            rooms,
        }
    }
}

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Lifecycle of a purchased ticket. Stored as TEXT in the tickets table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketStatus {
    Pending,
    Reserved,
    Paid,
}

#[derive(Debug, Clone, FromRow)]
pub struct Ticket {
    pub id: i64,
    pub ticket_type_id: i64,
    pub enrollment_id: i64,
    pub status: TicketStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Ticket category: price and entitlements (remote-only, hotel-inclusive).
#[derive(Debug, Clone, FromRow)]
pub struct TicketType {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub is_remote: bool,
    pub includes_hotel: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

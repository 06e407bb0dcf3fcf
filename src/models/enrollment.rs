use sqlx::FromRow;

/// A user's registration record for the event. Existence is a precondition
/// for any hotel access.
#[derive(Debug, Clone, FromRow)]
pub struct Enrollment {
    pub id: i64,
    pub user_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

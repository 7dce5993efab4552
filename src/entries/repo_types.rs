use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Entry record in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: Uuid,
    pub name: String,
    pub calories: i32,
    pub category: Option<String>,
    pub date: String, // YYYY-MM-DD
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Validated fields for a new entry; id and timestamp are assigned on insert.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub id: Uuid,
    pub name: String,
    pub calories: i32,
    pub category: Option<String>,
    pub date: String,
}

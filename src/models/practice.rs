use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Practice {
    pub id: i64,
    pub name: String,
    pub completed: bool,
    pub created_at: String, // ISO 8601
}

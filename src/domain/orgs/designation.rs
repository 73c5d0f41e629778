use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Designation {
    pub id: Uuid,
    pub enterprise_id: Uuid,
    pub title: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

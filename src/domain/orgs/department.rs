use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Department {
    pub id: Uuid,
    pub enterprise_id: Uuid,
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

use uuid::Uuid;

/// Employment record linking a user to an enterprise, department, and
/// designation. A user holds at most one.
#[derive(Debug, Clone)]
pub struct Associate {
    pub id: Uuid,
    pub user_id: Uuid,
    pub enterprise_id: Uuid,
    pub department_id: Option<Uuid>,
    pub designation_id: Option<Uuid>,
    pub hired_on: chrono::NaiveDate,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Associate joined with the display names of its org links, for listings
/// and the profile endpoint.
#[derive(Debug, Clone)]
pub struct AssociateDetail {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub user_email: String,
    pub enterprise_id: Uuid,
    pub enterprise_name: String,
    pub department_id: Option<Uuid>,
    pub department_name: Option<String>,
    pub designation_id: Option<Uuid>,
    pub designation_title: Option<String>,
    pub hired_on: chrono::NaiveDate,
}

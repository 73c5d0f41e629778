use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::tasks::task::{Task, TaskStatus};

/// Field updates for a task. Nullable columns use the double-Option
/// convention: None => not provided; Some(None) => set NULL;
/// Some(Some(v)) => set to value.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub status: Option<TaskStatus>,
    pub budget: Option<Decimal>,
    pub due_date: Option<Option<chrono::NaiveDate>>,
}

#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn create(
        &self,
        creator_id: Uuid,
        title: &str,
        description: Option<&str>,
        budget: Decimal,
        due_date: Option<chrono::NaiveDate>,
    ) -> anyhow::Result<Task>;

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Task>>;

    /// All tasks, newest first. ADMIN/SUPER listings.
    async fn list_all(&self, status: Option<TaskStatus>) -> anyhow::Result<Vec<Task>>;

    /// Tasks the user created or collaborates on, newest first.
    async fn list_for_user(
        &self,
        user_id: Uuid,
        status: Option<TaskStatus>,
    ) -> anyhow::Result<Vec<Task>>;

    /// Tasks the user collaborates on but did not create.
    async fn list_contributing(&self, user_id: Uuid) -> anyhow::Result<Vec<Task>>;

    async fn update(&self, id: Uuid, patch: TaskPatch) -> anyhow::Result<Option<Task>>;

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
}

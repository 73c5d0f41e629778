use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::tasks::task::Contributor;
use crate::domain::users::user::UserSummary;

#[async_trait]
pub trait CollaboratorRepository: Send + Sync {
    /// Inserts a membership row. Duplicate assignments surface as a
    /// unique-violation error from the store.
    async fn add(&self, task_id: Uuid, user_id: Uuid) -> anyhow::Result<()>;

    async fn remove(&self, task_id: Uuid, user_id: Uuid) -> anyhow::Result<bool>;

    async fn list(&self, task_id: Uuid) -> anyhow::Result<Vec<UserSummary>>;

    async fn is_member(&self, task_id: Uuid, user_id: Uuid) -> anyhow::Result<bool>;

    /// Creator plus collaborators, creator first.
    async fn contributors(&self, task_id: Uuid) -> anyhow::Result<Vec<Contributor>>;
}

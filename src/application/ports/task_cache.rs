use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::tasks::task::Task;

/// Read-through cache for single task lookups. Callers treat every error
/// as a miss; a broken cache must never fail a request.
#[async_trait]
pub trait TaskCache: Send + Sync {
    async fn get(&self, id: Uuid) -> anyhow::Result<Option<Task>>;

    async fn put(&self, task: &Task) -> anyhow::Result<()>;

    async fn invalidate(&self, id: Uuid) -> anyhow::Result<()>;
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::ports::task_cache::TaskCache;
use crate::domain::tasks::task::Task;

/// Stand-in used when no Redis URL is configured. Every lookup misses.
#[derive(Debug, Clone, Default)]
pub struct NoopTaskCache;

#[async_trait]
impl TaskCache for NoopTaskCache {
    async fn get(&self, _id: Uuid) -> anyhow::Result<Option<Task>> {
        Ok(None)
    }

    async fn put(&self, _task: &Task) -> anyhow::Result<()> {
        Ok(())
    }

    async fn invalidate(&self, _id: Uuid) -> anyhow::Result<()> {
        Ok(())
    }
}

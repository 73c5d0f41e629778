use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use redis::AsyncCommands;
use uuid::Uuid;

use crate::application::ports::task_cache::TaskCache;
use crate::domain::tasks::task::Task;

/// Task cache backed by Redis. Entries are JSON-encoded tasks stored under
/// `task:{id}` with a TTL, so a lost invalidation heals on its own.
#[derive(Clone)]
pub struct RedisTaskCache {
    client: Arc<redis::Client>,
    ttl: Duration,
}

impl RedisTaskCache {
    pub fn new(client: redis::Client, ttl: Duration) -> Self {
        Self {
            client: Arc::new(client),
            ttl,
        }
    }

    fn key(id: Uuid) -> String {
        format!("task:{id}")
    }
}

#[async_trait]
impl TaskCache for RedisTaskCache {
    async fn get(&self, id: Uuid) -> anyhow::Result<Option<Task>> {
        let mut conn = self
            .client
            .get_async_connection()
            .await
            .context("redis_get_async_connection")?;
        let payload: Option<String> = conn
            .get(Self::key(id))
            .await
            .context("redis_get_task")?;
        match payload {
            Some(raw) => {
                let task = serde_json::from_str(&raw).context("task_cache_decode")?;
                Ok(Some(task))
            }
            None => Ok(None),
        }
    }

    async fn put(&self, task: &Task) -> anyhow::Result<()> {
        let payload = serde_json::to_string(task).context("task_cache_encode")?;
        let mut conn = self
            .client
            .get_async_connection()
            .await
            .context("redis_get_async_connection")?;
        let _: () = conn
            .set_ex(Self::key(task.id), payload, self.ttl.as_secs())
            .await
            .context("redis_set_task")?;
        Ok(())
    }

    async fn invalidate(&self, id: Uuid) -> anyhow::Result<()> {
        let mut conn = self
            .client
            .get_async_connection()
            .await
            .context("redis_get_async_connection")?;
        let _: () = conn
            .del(Self::key(id))
            .await
            .context("redis_del_task")?;
        Ok(())
    }
}

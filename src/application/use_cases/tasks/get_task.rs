use uuid::Uuid;

use crate::application::access::{self, Actor, TaskCapability};
use crate::application::ports::collaborator_repository::CollaboratorRepository;
use crate::application::ports::task_cache::TaskCache;
use crate::application::ports::task_repository::TaskRepository;
use crate::domain::tasks::task::Task;

pub struct GetTask<'a, R, M, C>
where
    R: TaskRepository + ?Sized,
    M: CollaboratorRepository + ?Sized,
    C: TaskCache + ?Sized,
{
    pub repo: &'a R,
    pub members: &'a M,
    pub cache: &'a C,
}

impl<'a, R, M, C> GetTask<'a, R, M, C>
where
    R: TaskRepository + ?Sized,
    M: CollaboratorRepository + ?Sized,
    C: TaskCache + ?Sized,
{
    /// Read-through: cache first, then the database, populating the cache
    /// on a miss. Cache errors degrade to a plain database read. Returns
    /// None both for a missing task and for an actor without view access.
    pub async fn execute(&self, actor: &Actor, id: Uuid) -> anyhow::Result<Option<Task>> {
        let cached = match self.cache.get(id).await {
            Ok(hit) => hit,
            Err(e) => {
                tracing::warn!(task_id = %id, error = ?e, "task_cache_read_failed");
                None
            }
        };

        let task = match cached {
            Some(t) => t,
            None => {
                let Some(t) = self.repo.get_by_id(id).await? else {
                    return Ok(None);
                };
                if let Err(e) = self.cache.put(&t).await {
                    tracing::warn!(task_id = %id, error = ?e, "task_cache_write_failed");
                }
                t
            }
        };

        let cap = access::resolve_task(self.members, actor, &task).await;
        if cap < TaskCapability::View {
            return Ok(None);
        }
        Ok(Some(task))
    }
}

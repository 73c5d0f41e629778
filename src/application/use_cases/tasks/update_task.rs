use uuid::Uuid;

use crate::application::access::{self, Actor};
use crate::application::ports::collaborator_repository::CollaboratorRepository;
use crate::application::ports::task_cache::TaskCache;
use crate::application::ports::task_repository::{TaskPatch, TaskRepository};
use crate::application::use_cases::ActionError;
use crate::domain::tasks::task::Task;

pub struct UpdateTask<'a, R, M, C>
where
    R: TaskRepository + ?Sized,
    M: CollaboratorRepository + ?Sized,
    C: TaskCache + ?Sized,
{
    pub repo: &'a R,
    pub members: &'a M,
    pub cache: &'a C,
}

impl<'a, R, M, C> UpdateTask<'a, R, M, C>
where
    R: TaskRepository + ?Sized,
    M: CollaboratorRepository + ?Sized,
    C: TaskCache + ?Sized,
{
    pub async fn execute(
        &self,
        actor: &Actor,
        id: Uuid,
        patch: TaskPatch,
    ) -> Result<Task, ActionError> {
        let task = self
            .repo
            .get_by_id(id)
            .await?
            .ok_or(ActionError::NotFound)?;
        access::require_manage(self.members, actor, &task).await?;

        if let Some(title) = &patch.title {
            if title.trim().is_empty() {
                return Err(ActionError::invalid("title must not be empty"));
            }
        }
        if let Some(budget) = patch.budget {
            if budget < rust_decimal::Decimal::ZERO {
                return Err(ActionError::invalid("budget must not be negative"));
            }
        }

        let updated = self
            .repo
            .update(id, patch)
            .await?
            .ok_or(ActionError::NotFound)?;
        if let Err(e) = self.cache.invalidate(id).await {
            tracing::warn!(task_id = %id, error = ?e, "task_cache_invalidate_failed");
        }
        Ok(updated)
    }
}

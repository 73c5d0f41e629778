use uuid::Uuid;

use crate::application::access::{self, Actor};
use crate::application::ports::collaborator_repository::CollaboratorRepository;
use crate::application::ports::task_cache::TaskCache;
use crate::application::ports::task_repository::TaskRepository;
use crate::application::use_cases::ActionError;

pub struct DeleteTask<'a, R, M, C>
where
    R: TaskRepository + ?Sized,
    M: CollaboratorRepository + ?Sized,
    C: TaskCache + ?Sized,
{
    pub repo: &'a R,
    pub members: &'a M,
    pub cache: &'a C,
}

impl<'a, R, M, C> DeleteTask<'a, R, M, C>
where
    R: TaskRepository + ?Sized,
    M: CollaboratorRepository + ?Sized,
    C: TaskCache + ?Sized,
{
    pub async fn execute(&self, actor: &Actor, id: Uuid) -> Result<(), ActionError> {
        let task = self
            .repo
            .get_by_id(id)
            .await?
            .ok_or(ActionError::NotFound)?;
        access::require_manage(self.members, actor, &task).await?;

        let deleted = self.repo.delete(id).await?;
        if !deleted {
            return Err(ActionError::NotFound);
        }
        if let Err(e) = self.cache.invalidate(id).await {
            tracing::warn!(task_id = %id, error = ?e, "task_cache_invalidate_failed");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::application::testing::{MemCache, MemTaskStore};
    use crate::domain::users::user::Role;

    #[tokio::test]
    async fn creator_deletes_own_task() {
        let store = MemTaskStore::new();
        let cache = MemCache::new();
        let creator = Uuid::new_v4();
        let task = store.seed_task(creator, "teardown", Decimal::ZERO);
        cache.put(&task).await.unwrap();

        let uc = DeleteTask {
            repo: &store,
            members: &store,
            cache: &cache,
        };
        let actor = Actor::new(creator, Role::User);
        uc.execute(&actor, task.id).await.unwrap();
        assert!(store.get_by_id(task.id).await.unwrap().is_none());
        assert!(!cache.contains(task.id));
    }

    #[tokio::test]
    async fn collaborator_cannot_delete() {
        let store = MemTaskStore::new();
        let cache = MemCache::new();
        let task = store.seed_task(Uuid::new_v4(), "teardown", Decimal::ZERO);
        let collaborator = Uuid::new_v4();
        store.seed_member(task.id, collaborator);

        let uc = DeleteTask {
            repo: &store,
            members: &store,
            cache: &cache,
        };
        let actor = Actor::new(collaborator, Role::User);
        assert!(matches!(
            uc.execute(&actor, task.id).await,
            Err(ActionError::Forbidden)
        ));
        assert!(store.get_by_id(task.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn missing_task_is_not_found() {
        let store = MemTaskStore::new();
        let cache = MemCache::new();
        let uc = DeleteTask {
            repo: &store,
            members: &store,
            cache: &cache,
        };
        let actor = Actor::new(Uuid::new_v4(), Role::Super);
        assert!(matches!(
            uc.execute(&actor, Uuid::new_v4()).await,
            Err(ActionError::NotFound)
        ));
    }
}

use uuid::Uuid;

use crate::application::access::{self, Actor};
use crate::application::ports::collaborator_repository::CollaboratorRepository;
use crate::application::ports::task_repository::TaskRepository;
use crate::application::use_cases::ActionError;

pub struct RemoveCollaborator<'a, R, M>
where
    R: TaskRepository + ?Sized,
    M: CollaboratorRepository + ?Sized,
{
    pub repo: &'a R,
    pub members: &'a M,
}

impl<'a, R, M> RemoveCollaborator<'a, R, M>
where
    R: TaskRepository + ?Sized,
    M: CollaboratorRepository + ?Sized,
{
    pub async fn execute(
        &self,
        actor: &Actor,
        task_id: Uuid,
        user_id: Uuid,
    ) -> Result<(), ActionError> {
        let task = self
            .repo
            .get_by_id(task_id)
            .await?
            .ok_or(ActionError::NotFound)?;
        access::require_manage(self.members, actor, &task).await?;

        let removed = self.members.remove(task_id, user_id).await?;
        if !removed {
            return Err(ActionError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::application::testing::MemTaskStore;
    use crate::domain::users::user::Role;

    #[tokio::test]
    async fn creator_removes_a_collaborator() {
        let store = MemTaskStore::new();
        let creator = Uuid::new_v4();
        let helper = Uuid::new_v4();
        let task = store.seed_task(creator, "wrapup", Decimal::ZERO);
        store.seed_member(task.id, helper);

        let uc = RemoveCollaborator {
            repo: &store,
            members: &store,
        };
        let actor = Actor::new(creator, Role::User);
        uc.execute(&actor, task.id, helper).await.unwrap();
        assert!(!store.is_member(task.id, helper).await.unwrap());
    }

    #[tokio::test]
    async fn removing_a_non_member_is_not_found() {
        let store = MemTaskStore::new();
        let creator = Uuid::new_v4();
        let task = store.seed_task(creator, "wrapup", Decimal::ZERO);

        let uc = RemoveCollaborator {
            repo: &store,
            members: &store,
        };
        let actor = Actor::new(creator, Role::User);
        assert!(matches!(
            uc.execute(&actor, task.id, Uuid::new_v4()).await,
            Err(ActionError::NotFound)
        ));
    }

    #[tokio::test]
    async fn collaborator_cannot_remove_a_peer() {
        let store = MemTaskStore::new();
        let helper = Uuid::new_v4();
        let peer = Uuid::new_v4();
        let task = store.seed_task(Uuid::new_v4(), "wrapup", Decimal::ZERO);
        store.seed_member(task.id, helper);
        store.seed_member(task.id, peer);

        let uc = RemoveCollaborator {
            repo: &store,
            members: &store,
        };
        let actor = Actor::new(helper, Role::User);
        assert!(matches!(
            uc.execute(&actor, task.id, peer).await,
            Err(ActionError::Forbidden)
        ));
        assert!(store.is_member(task.id, peer).await.unwrap());
    }
}

use uuid::Uuid;

use crate::application::access::{self, Actor};
use crate::application::ports::collaborator_repository::CollaboratorRepository;
use crate::application::ports::task_repository::TaskRepository;
use crate::application::ports::user_repository::UserRepository;
use crate::application::use_cases::ActionError;

pub struct AddCollaborator<'a, R, M, U>
where
    R: TaskRepository + ?Sized,
    M: CollaboratorRepository + ?Sized,
    U: UserRepository + ?Sized,
{
    pub repo: &'a R,
    pub members: &'a M,
    pub users: &'a U,
}

impl<'a, R, M, U> AddCollaborator<'a, R, M, U>
where
    R: TaskRepository + ?Sized,
    M: CollaboratorRepository + ?Sized,
    U: UserRepository + ?Sized,
{
    /// Assigning the same user twice surfaces the store's unique violation,
    /// which the HTTP layer reports as a conflict.
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

        let target = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(ActionError::NotFound)?;
        if target.id == task.creator_id {
            return Err(ActionError::invalid("the creator already contributes"));
        }

        self.members.add(task_id, user_id).await?;
        Ok(())
    }
}

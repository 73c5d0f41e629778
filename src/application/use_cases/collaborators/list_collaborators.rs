use uuid::Uuid;

use crate::application::access::{self, Actor};
use crate::application::ports::collaborator_repository::CollaboratorRepository;
use crate::application::ports::task_repository::TaskRepository;
use crate::application::use_cases::ActionError;
use crate::domain::users::user::UserSummary;

pub struct ListCollaborators<'a, R, M>
where
    R: TaskRepository + ?Sized,
    M: CollaboratorRepository + ?Sized,
{
    pub repo: &'a R,
    pub members: &'a M,
}

impl<'a, R, M> ListCollaborators<'a, R, M>
where
    R: TaskRepository + ?Sized,
    M: CollaboratorRepository + ?Sized,
{
    pub async fn execute(
        &self,
        actor: &Actor,
        task_id: Uuid,
    ) -> Result<Vec<UserSummary>, ActionError> {
        let task = self
            .repo
            .get_by_id(task_id)
            .await?
            .ok_or(ActionError::NotFound)?;
        access::require_view(self.members, actor, &task).await?;
        let list = self.members.list(task_id).await?;
        Ok(list)
    }
}

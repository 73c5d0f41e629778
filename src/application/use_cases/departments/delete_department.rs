use uuid::Uuid;

use crate::application::access::{self, Actor};
use crate::application::ports::associate_repository::AssociateRepository;
use crate::application::ports::department_repository::DepartmentRepository;
use crate::application::use_cases::ActionError;

pub struct DeleteDepartment<'a, R, A>
where
    R: DepartmentRepository + ?Sized,
    A: AssociateRepository + ?Sized,
{
    pub repo: &'a R,
    pub associates: &'a A,
}

impl<'a, R, A> DeleteDepartment<'a, R, A>
where
    R: DepartmentRepository + ?Sized,
    A: AssociateRepository + ?Sized,
{
    pub async fn execute(&self, actor: &Actor, id: Uuid) -> Result<(), ActionError> {
        let department = self
            .repo
            .get_by_id(id)
            .await?
            .ok_or(ActionError::NotFound)?;
        access::require_org_manage(self.associates, actor, department.enterprise_id).await?;
        let deleted = self.repo.delete(id).await?;
        if !deleted {
            return Err(ActionError::NotFound);
        }
        Ok(())
    }
}

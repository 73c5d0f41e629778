use uuid::Uuid;

use crate::application::access::{self, Actor};
use crate::application::ports::associate_repository::AssociateRepository;
use crate::application::ports::department_repository::DepartmentRepository;
use crate::application::use_cases::ActionError;
use crate::domain::orgs::department::Department;

pub struct UpdateDepartment<'a, R, A>
where
    R: DepartmentRepository + ?Sized,
    A: AssociateRepository + ?Sized,
{
    pub repo: &'a R,
    pub associates: &'a A,
}

impl<'a, R, A> UpdateDepartment<'a, R, A>
where
    R: DepartmentRepository + ?Sized,
    A: AssociateRepository + ?Sized,
{
    pub async fn execute(
        &self,
        actor: &Actor,
        id: Uuid,
        name: String,
    ) -> Result<Department, ActionError> {
        let department = self
            .repo
            .get_by_id(id)
            .await?
            .ok_or(ActionError::NotFound)?;
        access::require_org_manage(self.associates, actor, department.enterprise_id).await?;
        if name.trim().is_empty() {
            return Err(ActionError::invalid("name must not be empty"));
        }
        let updated = self
            .repo
            .update(id, name)
            .await?
            .ok_or(ActionError::NotFound)?;
        Ok(updated)
    }
}

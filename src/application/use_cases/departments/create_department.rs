use uuid::Uuid;

use crate::application::access::{self, Actor};
use crate::application::ports::associate_repository::AssociateRepository;
use crate::application::ports::department_repository::DepartmentRepository;
use crate::application::use_cases::ActionError;
use crate::domain::orgs::department::Department;

pub struct CreateDepartment<'a, R, A>
where
    R: DepartmentRepository + ?Sized,
    A: AssociateRepository + ?Sized,
{
    pub repo: &'a R,
    pub associates: &'a A,
}

impl<'a, R, A> CreateDepartment<'a, R, A>
where
    R: DepartmentRepository + ?Sized,
    A: AssociateRepository + ?Sized,
{
    pub async fn execute(
        &self,
        actor: &Actor,
        enterprise_id: Uuid,
        name: &str,
    ) -> Result<Department, ActionError> {
        access::require_org_manage(self.associates, actor, enterprise_id).await?;
        let name = name.trim();
        if name.is_empty() {
            return Err(ActionError::invalid("name must not be empty"));
        }
        let department = self.repo.create(enterprise_id, name).await?;
        Ok(department)
    }
}

use uuid::Uuid;

use crate::application::access::{self, Actor};
use crate::application::ports::associate_repository::AssociateRepository;
use crate::application::ports::department_repository::DepartmentRepository;
use crate::application::ports::designation_repository::DesignationRepository;
use crate::application::use_cases::ActionError;
use crate::domain::orgs::associate::Associate;

pub struct CreateAssociate<'a, R, D, G>
where
    R: AssociateRepository + ?Sized,
    D: DepartmentRepository + ?Sized,
    G: DesignationRepository + ?Sized,
{
    pub repo: &'a R,
    pub departments: &'a D,
    pub designations: &'a G,
}

#[derive(Debug, Clone)]
pub struct CreateAssociateInput {
    pub user_id: Uuid,
    pub enterprise_id: Uuid,
    pub department_id: Option<Uuid>,
    pub designation_id: Option<Uuid>,
    pub hired_on: Option<chrono::NaiveDate>,
}

impl<'a, R, D, G> CreateAssociate<'a, R, D, G>
where
    R: AssociateRepository + ?Sized,
    D: DepartmentRepository + ?Sized,
    G: DesignationRepository + ?Sized,
{
    /// The schema cannot express "department belongs to the same
    /// enterprise as the associate", so the cross-tenant checks live here.
    /// A second record for the same user surfaces the unique violation.
    pub async fn execute(
        &self,
        actor: &Actor,
        input: CreateAssociateInput,
    ) -> Result<Associate, ActionError> {
        access::require_org_manage(self.repo, actor, input.enterprise_id).await?;

        if let Some(department_id) = input.department_id {
            let department = self
                .departments
                .get_by_id(department_id)
                .await?
                .ok_or(ActionError::NotFound)?;
            if department.enterprise_id != input.enterprise_id {
                return Err(ActionError::invalid(
                    "department belongs to another enterprise",
                ));
            }
        }
        if let Some(designation_id) = input.designation_id {
            let designation = self
                .designations
                .get_by_id(designation_id)
                .await?
                .ok_or(ActionError::NotFound)?;
            if designation.enterprise_id != input.enterprise_id {
                return Err(ActionError::invalid(
                    "designation belongs to another enterprise",
                ));
            }
        }

        let associate = self
            .repo
            .create(
                input.user_id,
                input.enterprise_id,
                input.department_id,
                input.designation_id,
                input.hired_on,
            )
            .await?;
        Ok(associate)
    }
}

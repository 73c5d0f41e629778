use uuid::Uuid;

use crate::application::access::{self, Actor};
use crate::application::ports::associate_repository::{AssociatePatch, AssociateRepository};
use crate::application::ports::department_repository::DepartmentRepository;
use crate::application::ports::designation_repository::DesignationRepository;
use crate::application::use_cases::ActionError;
use crate::domain::orgs::associate::Associate;

pub struct UpdateAssociate<'a, R, D, G>
where
    R: AssociateRepository + ?Sized,
    D: DepartmentRepository + ?Sized,
    G: DesignationRepository + ?Sized,
{
    pub repo: &'a R,
    pub departments: &'a D,
    pub designations: &'a G,
}

impl<'a, R, D, G> UpdateAssociate<'a, R, D, G>
where
    R: AssociateRepository + ?Sized,
    D: DepartmentRepository + ?Sized,
    G: DesignationRepository + ?Sized,
{
    pub async fn execute(
        &self,
        actor: &Actor,
        id: Uuid,
        patch: AssociatePatch,
    ) -> Result<Associate, ActionError> {
        let associate = self
            .repo
            .get_by_id(id)
            .await?
            .ok_or(ActionError::NotFound)?;
        access::require_org_manage(self.repo, actor, associate.enterprise_id).await?;

        if let Some(Some(department_id)) = patch.department_id {
            let department = self
                .departments
                .get_by_id(department_id)
                .await?
                .ok_or(ActionError::NotFound)?;
            if department.enterprise_id != associate.enterprise_id {
                return Err(ActionError::invalid(
                    "department belongs to another enterprise",
                ));
            }
        }
        if let Some(Some(designation_id)) = patch.designation_id {
            let designation = self
                .designations
                .get_by_id(designation_id)
                .await?
                .ok_or(ActionError::NotFound)?;
            if designation.enterprise_id != associate.enterprise_id {
                return Err(ActionError::invalid(
                    "designation belongs to another enterprise",
                ));
            }
        }

        let updated = self
            .repo
            .update(id, patch)
            .await?
            .ok_or(ActionError::NotFound)?;
        Ok(updated)
    }
}

use uuid::Uuid;

use crate::application::access::{self, Actor};
use crate::application::ports::associate_repository::AssociateRepository;
use crate::application::ports::designation_repository::DesignationRepository;
use crate::application::use_cases::ActionError;
use crate::domain::orgs::designation::Designation;

pub struct UpdateDesignation<'a, R, A>
where
    R: DesignationRepository + ?Sized,
    A: AssociateRepository + ?Sized,
{
    pub repo: &'a R,
    pub associates: &'a A,
}

impl<'a, R, A> UpdateDesignation<'a, R, A>
where
    R: DesignationRepository + ?Sized,
    A: AssociateRepository + ?Sized,
{
    pub async fn execute(
        &self,
        actor: &Actor,
        id: Uuid,
        title: String,
    ) -> Result<Designation, ActionError> {
        let designation = self
            .repo
            .get_by_id(id)
            .await?
            .ok_or(ActionError::NotFound)?;
        access::require_org_manage(self.associates, actor, designation.enterprise_id).await?;
        if title.trim().is_empty() {
            return Err(ActionError::invalid("title must not be empty"));
        }
        let updated = self
            .repo
            .update(id, title)
            .await?
            .ok_or(ActionError::NotFound)?;
        Ok(updated)
    }
}

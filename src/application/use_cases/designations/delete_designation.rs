use uuid::Uuid;

use crate::application::access::{self, Actor};
use crate::application::ports::associate_repository::AssociateRepository;
use crate::application::ports::designation_repository::DesignationRepository;
use crate::application::use_cases::ActionError;

pub struct DeleteDesignation<'a, R, A>
where
    R: DesignationRepository + ?Sized,
    A: AssociateRepository + ?Sized,
{
    pub repo: &'a R,
    pub associates: &'a A,
}

impl<'a, R, A> DeleteDesignation<'a, R, A>
where
    R: DesignationRepository + ?Sized,
    A: AssociateRepository + ?Sized,
{
    pub async fn execute(&self, actor: &Actor, id: Uuid) -> Result<(), ActionError> {
        let designation = self
            .repo
            .get_by_id(id)
            .await?
            .ok_or(ActionError::NotFound)?;
        access::require_org_manage(self.associates, actor, designation.enterprise_id).await?;
        let deleted = self.repo.delete(id).await?;
        if !deleted {
            return Err(ActionError::NotFound);
        }
        Ok(())
    }
}

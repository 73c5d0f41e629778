use uuid::Uuid;

use crate::application::access::{self, Actor};
use crate::application::ports::associate_repository::AssociateRepository;
use crate::application::use_cases::ActionError;

pub struct DeleteAssociate<'a, R: AssociateRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: AssociateRepository + ?Sized> DeleteAssociate<'a, R> {
    pub async fn execute(&self, actor: &Actor, id: Uuid) -> Result<(), ActionError> {
        let associate = self
            .repo
            .get_by_id(id)
            .await?
            .ok_or(ActionError::NotFound)?;
        access::require_org_manage(self.repo, actor, associate.enterprise_id).await?;
        let deleted = self.repo.delete(id).await?;
        if !deleted {
            return Err(ActionError::NotFound);
        }
        Ok(())
    }
}

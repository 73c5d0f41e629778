use uuid::Uuid;

use crate::application::access::Actor;
use crate::application::ports::enterprise_repository::EnterpriseRepository;
use crate::application::use_cases::ActionError;
use crate::domain::users::user::Role;

/// SUPER-only; the schema cascades departments, designations, and
/// associates away with the tenant.
pub struct DeleteEnterprise<'a, R: EnterpriseRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: EnterpriseRepository + ?Sized> DeleteEnterprise<'a, R> {
    pub async fn execute(&self, actor: &Actor, id: Uuid) -> Result<(), ActionError> {
        if actor.role != Role::Super {
            return Err(ActionError::Forbidden);
        }
        let deleted = self.repo.delete(id).await?;
        if !deleted {
            return Err(ActionError::NotFound);
        }
        Ok(())
    }
}

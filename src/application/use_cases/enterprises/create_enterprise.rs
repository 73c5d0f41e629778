use crate::application::access::Actor;
use crate::application::ports::enterprise_repository::EnterpriseRepository;
use crate::application::use_cases::ActionError;
use crate::domain::orgs::enterprise::Enterprise;
use crate::domain::users::user::Role;

/// Creating a tenant is reserved for SUPER; ADMINs administer an existing
/// enterprise, they do not mint new ones.
pub struct CreateEnterprise<'a, R: EnterpriseRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: EnterpriseRepository + ?Sized> CreateEnterprise<'a, R> {
    pub async fn execute(
        &self,
        actor: &Actor,
        name: &str,
        description: Option<&str>,
    ) -> Result<Enterprise, ActionError> {
        if actor.role != Role::Super {
            return Err(ActionError::Forbidden);
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(ActionError::invalid("name must not be empty"));
        }
        let enterprise = self.repo.create(name, description).await?;
        Ok(enterprise)
    }
}

use uuid::Uuid;

use crate::application::access::{self, Actor};
use crate::application::ports::associate_repository::AssociateRepository;
use crate::application::ports::enterprise_repository::EnterpriseRepository;
use crate::application::use_cases::ActionError;
use crate::domain::orgs::enterprise::Enterprise;

pub struct UpdateEnterprise<'a, R, A>
where
    R: EnterpriseRepository + ?Sized,
    A: AssociateRepository + ?Sized,
{
    pub repo: &'a R,
    pub associates: &'a A,
}

impl<'a, R, A> UpdateEnterprise<'a, R, A>
where
    R: EnterpriseRepository + ?Sized,
    A: AssociateRepository + ?Sized,
{
    /// SUPER updates any tenant; an ADMIN only the one their employment
    /// record points at.
    pub async fn execute(
        &self,
        actor: &Actor,
        id: Uuid,
        name: Option<String>,
        description: Option<Option<String>>,
    ) -> Result<Enterprise, ActionError> {
        access::require_org_manage(self.associates, actor, id).await?;

        if let Some(name) = &name {
            if name.trim().is_empty() {
                return Err(ActionError::invalid("name must not be empty"));
            }
        }

        let updated = self
            .repo
            .update(id, name, description)
            .await?
            .ok_or(ActionError::NotFound)?;
        Ok(updated)
    }
}

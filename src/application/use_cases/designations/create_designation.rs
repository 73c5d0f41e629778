use uuid::Uuid;

use crate::application::access::{self, Actor};
use crate::application::ports::associate_repository::AssociateRepository;
use crate::application::ports::designation_repository::DesignationRepository;
use crate::application::use_cases::ActionError;
use crate::domain::orgs::designation::Designation;

pub struct CreateDesignation<'a, R, A>
where
    R: DesignationRepository + ?Sized,
    A: AssociateRepository + ?Sized,
{
    pub repo: &'a R,
    pub associates: &'a A,
}

impl<'a, R, A> CreateDesignation<'a, R, A>
where
    R: DesignationRepository + ?Sized,
    A: AssociateRepository + ?Sized,
{
    pub async fn execute(
        &self,
        actor: &Actor,
        enterprise_id: Uuid,
        title: &str,
    ) -> Result<Designation, ActionError> {
        access::require_org_manage(self.associates, actor, enterprise_id).await?;
        let title = title.trim();
        if title.is_empty() {
            return Err(ActionError::invalid("title must not be empty"));
        }
        let designation = self.repo.create(enterprise_id, title).await?;
        Ok(designation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::MemOrg;
    use crate::domain::users::user::Role;

    #[tokio::test]
    async fn admin_adds_a_designation_to_their_tenant() {
        let org = MemOrg::new();
        let enterprise = org.seed_enterprise("Initech");
        let admin = Uuid::new_v4();
        org.seed_associate(admin, enterprise.id);

        let uc = CreateDesignation {
            repo: &org,
            associates: &org,
        };
        let actor = Actor::new(admin, Role::Admin);
        let created = uc.execute(&actor, enterprise.id, "Engineer").await.unwrap();
        assert_eq!(created.title, "Engineer");
    }

    #[tokio::test]
    async fn admin_without_employment_is_forbidden() {
        let org = MemOrg::new();
        let enterprise = org.seed_enterprise("Initech");

        let uc = CreateDesignation {
            repo: &org,
            associates: &org,
        };
        let actor = Actor::new(Uuid::new_v4(), Role::Admin);
        assert!(matches!(
            uc.execute(&actor, enterprise.id, "Engineer").await,
            Err(ActionError::Forbidden)
        ));
    }

    #[tokio::test]
    async fn duplicate_title_in_tenant_bubbles_the_store_error() {
        let org = MemOrg::new();
        let enterprise = org.seed_enterprise("Initech");
        org.seed_designation(enterprise.id, "Engineer");

        let uc = CreateDesignation {
            repo: &org,
            associates: &org,
        };
        let actor = Actor::new(Uuid::new_v4(), Role::Super);
        assert!(matches!(
            uc.execute(&actor, enterprise.id, "Engineer").await,
            Err(ActionError::Other(_))
        ));
    }
}

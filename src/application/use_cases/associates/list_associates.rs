use uuid::Uuid;

use crate::application::access::Actor;
use crate::application::ports::associate_repository::AssociateRepository;
use crate::application::use_cases::ActionError;
use crate::domain::orgs::associate::AssociateDetail;
use crate::domain::users::user::Role;

/// Staff roster. SUPER browses any tenant; an ADMIN is pinned to their own
/// enterprise whatever filter they pass; plain users have no roster access.
pub struct ListAssociates<'a, R: AssociateRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: AssociateRepository + ?Sized> ListAssociates<'a, R> {
    pub async fn execute(
        &self,
        actor: &Actor,
        enterprise_id: Option<Uuid>,
    ) -> Result<Vec<AssociateDetail>, ActionError> {
        match actor.role {
            Role::Super => {
                let list = self.repo.list(enterprise_id).await?;
                Ok(list)
            }
            Role::Admin => {
                let own = self
                    .repo
                    .find_by_user(actor.id)
                    .await?
                    .ok_or(ActionError::Forbidden)?;
                if enterprise_id.is_some() && enterprise_id != Some(own.enterprise_id) {
                    return Err(ActionError::Forbidden);
                }
                let list = self.repo.list(Some(own.enterprise_id)).await?;
                Ok(list)
            }
            Role::User => Err(ActionError::Forbidden),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::MemOrg;

    #[tokio::test]
    async fn super_browses_any_tenant() {
        let org = MemOrg::new();
        let first = org.seed_enterprise("Initech");
        let second = org.seed_enterprise("Globex");
        org.seed_associate(Uuid::new_v4(), first.id);
        org.seed_associate(Uuid::new_v4(), second.id);

        let uc = ListAssociates { repo: &org };
        let actor = Actor::new(Uuid::new_v4(), Role::Super);
        assert_eq!(uc.execute(&actor, None).await.unwrap().len(), 2);
        assert_eq!(uc.execute(&actor, Some(first.id)).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn admin_is_pinned_to_their_tenant() {
        let org = MemOrg::new();
        let home = org.seed_enterprise("Initech");
        let elsewhere = org.seed_enterprise("Globex");
        let admin = Uuid::new_v4();
        org.seed_associate(admin, home.id);
        org.seed_associate(Uuid::new_v4(), home.id);
        org.seed_associate(Uuid::new_v4(), elsewhere.id);

        let uc = ListAssociates { repo: &org };
        let actor = Actor::new(admin, Role::Admin);
        assert_eq!(uc.execute(&actor, None).await.unwrap().len(), 2);
        assert!(matches!(
            uc.execute(&actor, Some(elsewhere.id)).await,
            Err(ActionError::Forbidden)
        ));
    }

    #[tokio::test]
    async fn admin_without_employment_sees_nothing() {
        let org = MemOrg::new();
        let uc = ListAssociates { repo: &org };
        let actor = Actor::new(Uuid::new_v4(), Role::Admin);
        assert!(matches!(
            uc.execute(&actor, None).await,
            Err(ActionError::Forbidden)
        ));
    }

    #[tokio::test]
    async fn plain_user_has_no_roster_access() {
        let org = MemOrg::new();
        let uc = ListAssociates { repo: &org };
        let actor = Actor::new(Uuid::new_v4(), Role::User);
        assert!(matches!(
            uc.execute(&actor, None).await,
            Err(ActionError::Forbidden)
        ));
    }
}

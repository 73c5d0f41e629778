use uuid::Uuid;

use crate::application::access::{self, Actor};
use crate::application::ports::associate_repository::AssociateRepository;
use crate::domain::orgs::associate::AssociateDetail;

/// Single employment record. Invisible records read as missing.
pub struct GetAssociate<'a, R: AssociateRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: AssociateRepository + ?Sized> GetAssociate<'a, R> {
    pub async fn execute(&self, actor: &Actor, id: Uuid) -> anyhow::Result<Option<AssociateDetail>> {
        let detail = match self.repo.get_detail(id).await? {
            Some(d) => d,
            None => return Ok(None),
        };
        let visible =
            access::can_view_associate(self.repo, actor, detail.user_id, detail.enterprise_id)
                .await;
        if visible { Ok(Some(detail)) } else { Ok(None) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::MemOrg;
    use crate::domain::users::user::Role;

    #[tokio::test]
    async fn worker_reads_their_own_record() {
        let org = MemOrg::new();
        let enterprise = org.seed_enterprise("Initech");
        let worker = Uuid::new_v4();
        org.add_user(worker, "worker");
        let record = org.seed_associate(worker, enterprise.id);

        let uc = GetAssociate { repo: &org };
        let actor = Actor::new(worker, Role::User);
        let found = uc.execute(&actor, record.id).await.unwrap();
        assert_eq!(found.map(|d| d.user_id), Some(worker));
    }

    #[tokio::test]
    async fn same_tenant_admin_reads_it() {
        let org = MemOrg::new();
        let enterprise = org.seed_enterprise("Initech");
        let admin = Uuid::new_v4();
        org.seed_associate(admin, enterprise.id);
        let record = org.seed_associate(Uuid::new_v4(), enterprise.id);

        let uc = GetAssociate { repo: &org };
        let actor = Actor::new(admin, Role::Admin);
        assert!(uc.execute(&actor, record.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn unrelated_user_sees_nothing() {
        let org = MemOrg::new();
        let enterprise = org.seed_enterprise("Initech");
        let record = org.seed_associate(Uuid::new_v4(), enterprise.id);

        let uc = GetAssociate { repo: &org };
        let actor = Actor::new(Uuid::new_v4(), Role::User);
        assert!(uc.execute(&actor, record.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn foreign_tenant_admin_sees_nothing() {
        let org = MemOrg::new();
        let enterprise = org.seed_enterprise("Initech");
        let elsewhere = org.seed_enterprise("Globex");
        let admin = Uuid::new_v4();
        org.seed_associate(admin, elsewhere.id);
        let record = org.seed_associate(Uuid::new_v4(), enterprise.id);

        let uc = GetAssociate { repo: &org };
        let actor = Actor::new(admin, Role::Admin);
        assert!(uc.execute(&actor, record.id).await.unwrap().is_none());
    }
}

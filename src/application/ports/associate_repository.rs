use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::orgs::associate::{Associate, AssociateDetail};

/// Field updates for an associate. department/designation use the
/// double-Option convention: None => not provided; Some(None) => unlink.
#[derive(Debug, Clone, Default)]
pub struct AssociatePatch {
    pub department_id: Option<Option<Uuid>>,
    pub designation_id: Option<Option<Uuid>>,
    pub hired_on: Option<chrono::NaiveDate>,
}

#[async_trait]
pub trait AssociateRepository: Send + Sync {
    async fn create(
        &self,
        user_id: Uuid,
        enterprise_id: Uuid,
        department_id: Option<Uuid>,
        designation_id: Option<Uuid>,
        hired_on: Option<chrono::NaiveDate>,
    ) -> anyhow::Result<Associate>;

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Associate>>;

    async fn get_detail(&self, id: Uuid) -> anyhow::Result<Option<AssociateDetail>>;

    async fn find_by_user(&self, user_id: Uuid) -> anyhow::Result<Option<Associate>>;

    async fn find_detail_by_user(&self, user_id: Uuid) -> anyhow::Result<Option<AssociateDetail>>;

    async fn list(&self, enterprise_id: Option<Uuid>) -> anyhow::Result<Vec<AssociateDetail>>;

    async fn update(&self, id: Uuid, patch: AssociatePatch) -> anyhow::Result<Option<Associate>>;

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
}

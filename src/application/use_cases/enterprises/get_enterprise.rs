use uuid::Uuid;

use crate::application::ports::enterprise_repository::EnterpriseRepository;
use crate::domain::orgs::enterprise::Enterprise;

pub struct GetEnterprise<'a, R: EnterpriseRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: EnterpriseRepository + ?Sized> GetEnterprise<'a, R> {
    pub async fn execute(&self, id: Uuid) -> anyhow::Result<Option<Enterprise>> {
        self.repo.get_by_id(id).await
    }
}

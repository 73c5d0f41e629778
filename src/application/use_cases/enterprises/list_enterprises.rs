use crate::application::ports::enterprise_repository::EnterpriseRepository;
use crate::domain::orgs::enterprise::Enterprise;

pub struct ListEnterprises<'a, R: EnterpriseRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: EnterpriseRepository + ?Sized> ListEnterprises<'a, R> {
    pub async fn execute(&self) -> anyhow::Result<Vec<Enterprise>> {
        self.repo.list().await
    }
}

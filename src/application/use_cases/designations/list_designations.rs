use uuid::Uuid;

use crate::application::ports::designation_repository::DesignationRepository;
use crate::domain::orgs::designation::Designation;

pub struct ListDesignations<'a, R: DesignationRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: DesignationRepository + ?Sized> ListDesignations<'a, R> {
    pub async fn execute(&self, enterprise_id: Option<Uuid>) -> anyhow::Result<Vec<Designation>> {
        self.repo.list(enterprise_id).await
    }
}

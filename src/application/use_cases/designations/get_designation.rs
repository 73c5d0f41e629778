use uuid::Uuid;

use crate::application::ports::designation_repository::DesignationRepository;
use crate::domain::orgs::designation::Designation;

pub struct GetDesignation<'a, R: DesignationRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: DesignationRepository + ?Sized> GetDesignation<'a, R> {
    pub async fn execute(&self, id: Uuid) -> anyhow::Result<Option<Designation>> {
        self.repo.get_by_id(id).await
    }
}

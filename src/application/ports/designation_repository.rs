use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::orgs::designation::Designation;

#[async_trait]
pub trait DesignationRepository: Send + Sync {
    async fn create(&self, enterprise_id: Uuid, title: &str) -> anyhow::Result<Designation>;

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Designation>>;

    async fn list(&self, enterprise_id: Option<Uuid>) -> anyhow::Result<Vec<Designation>>;

    async fn update(&self, id: Uuid, title: String) -> anyhow::Result<Option<Designation>>;

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
}

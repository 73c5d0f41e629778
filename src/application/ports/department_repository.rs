use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::orgs::department::Department;

#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    async fn create(&self, enterprise_id: Uuid, name: &str) -> anyhow::Result<Department>;

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Department>>;

    async fn list(&self, enterprise_id: Option<Uuid>) -> anyhow::Result<Vec<Department>>;

    async fn update(&self, id: Uuid, name: String) -> anyhow::Result<Option<Department>>;

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
}

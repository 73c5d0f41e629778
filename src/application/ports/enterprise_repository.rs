use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::orgs::enterprise::Enterprise;

#[async_trait]
pub trait EnterpriseRepository: Send + Sync {
    async fn create(&self, name: &str, description: Option<&str>) -> anyhow::Result<Enterprise>;

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Enterprise>>;

    async fn list(&self) -> anyhow::Result<Vec<Enterprise>>;

    // description: None => not provided; Some(None) => clear
    async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        description: Option<Option<String>>,
    ) -> anyhow::Result<Option<Enterprise>>;

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
}

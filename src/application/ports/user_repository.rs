use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::users::user::{Role, User};

/// A user row joined with its stored password hash, for credential checks.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts with the default USER role.
    async fn create_user(
        &self,
        email: &str,
        name: &str,
        password_hash: &str,
    ) -> anyhow::Result<User>;

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<UserCredentials>>;

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>>;

    async fn list_users(&self) -> anyhow::Result<Vec<User>>;

    async fn update_profile(
        &self,
        id: Uuid,
        name: Option<String>,
        password_hash: Option<String>,
    ) -> anyhow::Result<Option<User>>;

    async fn update_role(&self, id: Uuid, role: Role) -> anyhow::Result<Option<User>>;
}

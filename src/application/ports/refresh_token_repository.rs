use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::tokens::refresh_token::RefreshToken;

#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    async fn create(
        &self,
        user_id: Uuid,
        token_hash: &str,
        expires_at: chrono::DateTime<chrono::Utc>,
    ) -> anyhow::Result<RefreshToken>;

    async fn find_by_hash(&self, token_hash: &str) -> anyhow::Result<Option<RefreshToken>>;

    async fn revoke(&self, id: Uuid) -> anyhow::Result<bool>;

    /// Revokes every live token of a user (forced re-login).
    async fn revoke_all_for_user(&self, user_id: Uuid) -> anyhow::Result<u64>;

    /// Deletes rows past their expiry; returns how many were removed.
    async fn delete_expired(&self) -> anyhow::Result<u64>;
}

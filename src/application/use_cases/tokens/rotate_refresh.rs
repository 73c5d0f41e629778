use uuid::Uuid;

use crate::application::ports::refresh_token_repository::RefreshTokenRepository;
use crate::application::use_cases::tokens::{generate_token, hash_token};

pub struct RotateRefreshToken<'a, R: RefreshTokenRepository + ?Sized> {
    pub repo: &'a R,
}

#[derive(Debug, Clone)]
pub struct RotatedToken {
    pub user_id: Uuid,
    pub cleartext: String,
}

impl<'a, R: RefreshTokenRepository + ?Sized> RotateRefreshToken<'a, R> {
    /// Exchanges a live refresh token for a new one. The presented token
    /// is revoked even though a new one is issued; replaying it later
    /// fails. Returns None for unknown, expired, or revoked tokens.
    pub async fn execute(
        &self,
        presented: &str,
        ttl_secs: i64,
    ) -> anyhow::Result<Option<RotatedToken>> {
        let row = match self.repo.find_by_hash(&hash_token(presented)).await? {
            Some(r) => r,
            None => return Ok(None),
        };
        if !row.is_usable(chrono::Utc::now()) {
            return Ok(None);
        }
        self.repo.revoke(row.id).await?;

        let cleartext = generate_token();
        let expires_at = chrono::Utc::now() + chrono::Duration::seconds(ttl_secs);
        self.repo
            .create(row.user_id, &hash_token(&cleartext), expires_at)
            .await?;
        Ok(Some(RotatedToken {
            user_id: row.user_id,
            cleartext,
        }))
    }
}

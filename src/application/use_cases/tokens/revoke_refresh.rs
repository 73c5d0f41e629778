use crate::application::ports::refresh_token_repository::RefreshTokenRepository;
use crate::application::use_cases::tokens::hash_token;

pub struct RevokeRefreshToken<'a, R: RefreshTokenRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: RefreshTokenRepository + ?Sized> RevokeRefreshToken<'a, R> {
    /// Logout path. Idempotent: revoking an unknown or already-revoked
    /// token reports false without failing.
    pub async fn execute(&self, presented: &str) -> anyhow::Result<bool> {
        match self.repo.find_by_hash(&hash_token(presented)).await? {
            Some(row) if row.revoked_at.is_none() => self.repo.revoke(row.id).await,
            _ => Ok(false),
        }
    }
}

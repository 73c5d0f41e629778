use uuid::Uuid;

use crate::application::ports::refresh_token_repository::RefreshTokenRepository;
use crate::application::use_cases::tokens::{generate_token, hash_token};

pub struct IssueRefreshToken<'a, R: RefreshTokenRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: RefreshTokenRepository + ?Sized> IssueRefreshToken<'a, R> {
    /// Mints a fresh opaque token, stores its digest, and returns the
    /// cleartext for the response body.
    pub async fn execute(&self, user_id: Uuid, ttl_secs: i64) -> anyhow::Result<String> {
        let cleartext = generate_token();
        let expires_at = chrono::Utc::now() + chrono::Duration::seconds(ttl_secs);
        self.repo
            .create(user_id, &hash_token(&cleartext), expires_at)
            .await?;
        Ok(cleartext)
    }
}

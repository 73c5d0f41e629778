use crate::application::ports::refresh_token_repository::RefreshTokenRepository;

pub struct PurgeExpiredTokens<'a, R: RefreshTokenRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: RefreshTokenRepository + ?Sized> PurgeExpiredTokens<'a, R> {
    pub async fn execute(&self) -> anyhow::Result<u64> {
        self.repo.delete_expired().await
    }
}

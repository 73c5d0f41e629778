use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordVerifier},
};

use crate::application::ports::user_repository::UserRepository;
use crate::domain::users::user::User;

pub struct Login<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl<'a, R: UserRepository + ?Sized> Login<'a, R> {
    /// Returns None for an unknown email and for a wrong password alike;
    /// the handler turns both into the same 401.
    pub async fn execute(&self, req: &LoginRequest) -> anyhow::Result<Option<User>> {
        let creds = match self.repo.find_by_email(&req.email).await? {
            Some(c) => c,
            None => return Ok(None),
        };
        let parsed =
            PasswordHash::new(&creds.password_hash).map_err(|e| anyhow::anyhow!(e.to_string()))?;
        if Argon2::default()
            .verify_password(req.password.as_bytes(), &parsed)
            .is_ok()
        {
            Ok(Some(creds.user))
        } else {
            Ok(None)
        }
    }
}

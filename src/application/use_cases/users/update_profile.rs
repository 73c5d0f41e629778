use uuid::Uuid;

use crate::application::ports::user_repository::UserRepository;
use crate::application::use_cases::auth::hash_password;
use crate::domain::users::user::User;

pub struct UpdateProfile<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> UpdateProfile<'a, R> {
    /// Self-service update of name and/or password. A new password is
    /// re-hashed with a fresh salt.
    pub async fn execute(
        &self,
        user_id: Uuid,
        name: Option<String>,
        password: Option<String>,
    ) -> anyhow::Result<Option<User>> {
        let password_hash = match password {
            Some(p) => Some(hash_password(&p)?),
            None => None,
        };
        self.repo.update_profile(user_id, name, password_hash).await
    }
}

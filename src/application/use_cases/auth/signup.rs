use crate::application::ports::user_repository::UserRepository;
use crate::application::use_cases::auth::hash_password;
use crate::domain::users::user::User;

pub struct Signup<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

#[derive(Debug, Clone)]
pub struct SignupRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

impl<'a, R: UserRepository + ?Sized> Signup<'a, R> {
    /// New accounts always start at the USER tier; promotion is a SUPER
    /// operation.
    pub async fn execute(&self, req: &SignupRequest) -> anyhow::Result<User> {
        let hash = hash_password(&req.password)?;
        let user = self.repo.create_user(&req.email, &req.name, &hash).await?;
        Ok(user)
    }
}

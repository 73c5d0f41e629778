use uuid::Uuid;

use crate::application::ports::associate_repository::AssociateRepository;
use crate::application::ports::user_repository::UserRepository;
use crate::domain::orgs::associate::AssociateDetail;
use crate::domain::users::user::User;

pub struct GetProfile<'a, U, A>
where
    U: UserRepository + ?Sized,
    A: AssociateRepository + ?Sized,
{
    pub users: &'a U,
    pub associates: &'a A,
}

#[derive(Debug, Clone)]
pub struct Profile {
    pub user: User,
    pub employment: Option<AssociateDetail>,
}

impl<'a, U, A> GetProfile<'a, U, A>
where
    U: UserRepository + ?Sized,
    A: AssociateRepository + ?Sized,
{
    pub async fn execute(&self, user_id: Uuid) -> anyhow::Result<Option<Profile>> {
        let user = match self.users.find_by_id(user_id).await? {
            Some(u) => u,
            None => return Ok(None),
        };
        let employment = self.associates.find_detail_by_user(user_id).await?;
        Ok(Some(Profile { user, employment }))
    }
}

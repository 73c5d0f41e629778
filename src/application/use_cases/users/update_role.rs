use uuid::Uuid;

use crate::application::access::Actor;
use crate::application::ports::refresh_token_repository::RefreshTokenRepository;
use crate::application::ports::user_repository::UserRepository;
use crate::application::use_cases::ActionError;
use crate::domain::users::user::{Role, User};

pub struct UpdateUserRole<'a, U, T>
where
    U: UserRepository + ?Sized,
    T: RefreshTokenRepository + ?Sized,
{
    pub users: &'a U,
    pub tokens: &'a T,
}

impl<'a, U, T> UpdateUserRole<'a, U, T>
where
    U: UserRepository + ?Sized,
    T: RefreshTokenRepository + ?Sized,
{
    /// SUPER-only tier change. The target's refresh tokens are revoked so
    /// the new role takes effect at the next token issuance rather than
    /// whenever the old access token happens to expire.
    pub async fn execute(
        &self,
        actor: &Actor,
        target_id: Uuid,
        role: Role,
    ) -> Result<User, ActionError> {
        if actor.role != Role::Super {
            return Err(ActionError::Forbidden);
        }
        if actor.id == target_id && role != Role::Super {
            return Err(ActionError::invalid("cannot demote own account"));
        }
        let updated = self
            .users
            .update_role(target_id, role)
            .await?
            .ok_or(ActionError::NotFound)?;
        self.tokens
            .revoke_all_for_user(target_id)
            .await
            .map_err(ActionError::Other)?;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::application::testing::MemUsers;
    use crate::domain::tokens::refresh_token::RefreshToken;

    #[derive(Default)]
    struct CountingTokens {
        revoked_users: Mutex<Vec<Uuid>>,
    }

    #[async_trait]
    impl RefreshTokenRepository for CountingTokens {
        async fn create(
            &self,
            _user_id: Uuid,
            _token_hash: &str,
            _expires_at: chrono::DateTime<chrono::Utc>,
        ) -> anyhow::Result<RefreshToken> {
            unimplemented!()
        }

        async fn find_by_hash(&self, _token_hash: &str) -> anyhow::Result<Option<RefreshToken>> {
            Ok(None)
        }

        async fn revoke(&self, _id: Uuid) -> anyhow::Result<bool> {
            Ok(false)
        }

        async fn revoke_all_for_user(&self, user_id: Uuid) -> anyhow::Result<u64> {
            self.revoked_users.lock().unwrap().push(user_id);
            Ok(1)
        }

        async fn delete_expired(&self) -> anyhow::Result<u64> {
            Ok(0)
        }
    }

    #[tokio::test]
    async fn super_promotes_user_and_revokes_their_sessions() {
        let users = MemUsers::new();
        let target = users.seed("target", Role::User);
        let tokens = CountingTokens::default();
        let actor = Actor::new(Uuid::new_v4(), Role::Super);

        let uc = UpdateUserRole {
            users: &users,
            tokens: &tokens,
        };
        let updated = uc.execute(&actor, target.id, Role::Admin).await.unwrap();
        assert_eq!(updated.role, Role::Admin);
        assert_eq!(*tokens.revoked_users.lock().unwrap(), vec![target.id]);
    }

    #[tokio::test]
    async fn admin_cannot_change_roles() {
        let users = MemUsers::new();
        let target = users.seed("target", Role::User);
        let tokens = CountingTokens::default();
        let actor = Actor::new(Uuid::new_v4(), Role::Admin);

        let uc = UpdateUserRole {
            users: &users,
            tokens: &tokens,
        };
        assert!(matches!(
            uc.execute(&actor, target.id, Role::Admin).await,
            Err(ActionError::Forbidden)
        ));
    }

    #[tokio::test]
    async fn super_cannot_demote_themself() {
        let users = MemUsers::new();
        let me = users.seed("boss", Role::Super);
        let tokens = CountingTokens::default();
        let actor = Actor::new(me.id, Role::Super);

        let uc = UpdateUserRole {
            users: &users,
            tokens: &tokens,
        };
        assert!(matches!(
            uc.execute(&actor, me.id, Role::User).await,
            Err(ActionError::Invalid(_))
        ));
    }

    #[tokio::test]
    async fn unknown_target_is_not_found() {
        let users = MemUsers::new();
        let tokens = CountingTokens::default();
        let actor = Actor::new(Uuid::new_v4(), Role::Super);

        let uc = UpdateUserRole {
            users: &users,
            tokens: &tokens,
        };
        assert!(matches!(
            uc.execute(&actor, Uuid::new_v4(), Role::Admin).await,
            Err(ActionError::NotFound)
        ));
    }
}

use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::application::ports::refresh_token_repository::RefreshTokenRepository;
use crate::domain::tokens::refresh_token::RefreshToken;
use crate::infrastructure::db::PgPool;

pub struct SqlxRefreshTokenRepository {
    pub pool: PgPool,
}

impl SqlxRefreshTokenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_token(row: &PgRow) -> RefreshToken {
    RefreshToken {
        id: row.get("id"),
        user_id: row.get("user_id"),
        expires_at: row.get("expires_at"),
        revoked_at: row.get("revoked_at"),
        created_at: row.get("created_at"),
    }
}

#[async_trait]
impl RefreshTokenRepository for SqlxRefreshTokenRepository {
    async fn create(
        &self,
        user_id: Uuid,
        token_hash: &str,
        expires_at: chrono::DateTime<chrono::Utc>,
    ) -> anyhow::Result<RefreshToken> {
        let row = sqlx::query(
            r#"INSERT INTO refresh_tokens (user_id, token_hash, expires_at)
               VALUES ($1, $2, $3)
               RETURNING id, user_id, expires_at, revoked_at, created_at"#,
        )
        .bind(user_id)
        .bind(token_hash)
        .bind(expires_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(map_token(&row))
    }

    async fn find_by_hash(&self, token_hash: &str) -> anyhow::Result<Option<RefreshToken>> {
        let row = sqlx::query(
            r#"SELECT id, user_id, expires_at, revoked_at, created_at
               FROM refresh_tokens WHERE token_hash = $1"#,
        )
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_token))
    }

    async fn revoke(&self, id: Uuid) -> anyhow::Result<bool> {
        let res = sqlx::query(
            r#"UPDATE refresh_tokens SET revoked_at = now()
                WHERE id = $1 AND revoked_at IS NULL"#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn revoke_all_for_user(&self, user_id: Uuid) -> anyhow::Result<u64> {
        let res = sqlx::query(
            r#"UPDATE refresh_tokens SET revoked_at = now()
                WHERE user_id = $1 AND revoked_at IS NULL"#,
        )
        .bind(user_id)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected())
    }

    async fn delete_expired(&self) -> anyhow::Result<u64> {
        let res = sqlx::query("DELETE FROM refresh_tokens WHERE expires_at < now()")
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected())
    }
}

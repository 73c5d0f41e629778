use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::application::ports::user_repository::{UserCredentials, UserRepository};
use crate::domain::users::user::{Role, User};
use crate::infrastructure::db::PgPool;

pub struct SqlxUserRepository {
    pub pool: PgPool,
}

impl SqlxUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_user(row: &PgRow) -> anyhow::Result<User> {
    let role: String = row.get("role");
    Ok(User {
        id: row.get("id"),
        email: row.get("email"),
        name: row.get("name"),
        role: role.parse::<Role>()?,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    async fn create_user(
        &self,
        email: &str,
        name: &str,
        password_hash: &str,
    ) -> anyhow::Result<User> {
        let row = sqlx::query(
            r#"INSERT INTO users (email, name, password_hash) VALUES ($1, $2, $3)
               RETURNING id, email, name, role, created_at, updated_at"#,
        )
        .bind(email)
        .bind(name)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;
        map_user(&row)
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<UserCredentials>> {
        let row = sqlx::query(
            r#"SELECT id, email, name, role, password_hash, created_at, updated_at
               FROM users WHERE email = $1"#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        match row {
            Some(r) => Ok(Some(UserCredentials {
                user: map_user(&r)?,
                password_hash: r.get("password_hash"),
            })),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        let row = sqlx::query(
            r#"SELECT id, email, name, role, created_at, updated_at FROM users WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(map_user).transpose()
    }

    async fn list_users(&self) -> anyhow::Result<Vec<User>> {
        let rows = sqlx::query(
            r#"SELECT id, email, name, role, created_at, updated_at
               FROM users ORDER BY created_at"#,
        )
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(map_user).collect()
    }

    async fn update_profile(
        &self,
        id: Uuid,
        name: Option<String>,
        password_hash: Option<String>,
    ) -> anyhow::Result<Option<User>> {
        let row = sqlx::query(
            r#"UPDATE users SET
                    name = COALESCE($1, name),
                    password_hash = COALESCE($2, password_hash),
                    updated_at = now()
                WHERE id = $3
                RETURNING id, email, name, role, created_at, updated_at"#,
        )
        .bind(name)
        .bind(password_hash)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(map_user).transpose()
    }

    async fn update_role(&self, id: Uuid, role: Role) -> anyhow::Result<Option<User>> {
        let row = sqlx::query(
            r#"UPDATE users SET role = $1, updated_at = now()
                WHERE id = $2
                RETURNING id, email, name, role, created_at, updated_at"#,
        )
        .bind(role.as_str())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(map_user).transpose()
    }
}

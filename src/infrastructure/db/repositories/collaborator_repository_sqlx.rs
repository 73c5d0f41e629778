use async_trait::async_trait;
use sqlx::Row;
use uuid::Uuid;

use crate::application::ports::collaborator_repository::CollaboratorRepository;
use crate::domain::tasks::task::Contributor;
use crate::domain::users::user::UserSummary;
use crate::infrastructure::db::PgPool;

pub struct SqlxCollaboratorRepository {
    pub pool: PgPool,
}

impl SqlxCollaboratorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CollaboratorRepository for SqlxCollaboratorRepository {
    async fn add(&self, task_id: Uuid, user_id: Uuid) -> anyhow::Result<()> {
        sqlx::query("INSERT INTO user_tasks (user_id, task_id) VALUES ($1, $2)")
            .bind(user_id)
            .bind(task_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn remove(&self, task_id: Uuid, user_id: Uuid) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM user_tasks WHERE user_id = $1 AND task_id = $2")
            .bind(user_id)
            .bind(task_id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn list(&self, task_id: Uuid) -> anyhow::Result<Vec<UserSummary>> {
        let rows = sqlx::query(
            r#"SELECT u.id, u.email, u.name
               FROM user_tasks ut
               JOIN users u ON u.id = ut.user_id
               WHERE ut.task_id = $1
               ORDER BY ut.created_at"#,
        )
        .bind(task_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .iter()
            .map(|r| UserSummary {
                id: r.get("id"),
                email: r.get("email"),
                name: r.get("name"),
            })
            .collect())
    }

    async fn is_member(&self, task_id: Uuid, user_id: Uuid) -> anyhow::Result<bool> {
        let row = sqlx::query("SELECT 1 FROM user_tasks WHERE user_id = $1 AND task_id = $2")
            .bind(user_id)
            .bind(task_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    async fn contributors(&self, task_id: Uuid) -> anyhow::Result<Vec<Contributor>> {
        let rows = sqlx::query(
            r#"SELECT u.id, u.email, u.name, TRUE AS is_creator, t.created_at AS since
               FROM tasks t
               JOIN users u ON u.id = t.creator_id
               WHERE t.id = $1
               UNION ALL
               SELECT u.id, u.email, u.name, FALSE AS is_creator, ut.created_at AS since
               FROM user_tasks ut
               JOIN users u ON u.id = ut.user_id
               WHERE ut.task_id = $1
               ORDER BY is_creator DESC, since"#,
        )
        .bind(task_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .iter()
            .map(|r| Contributor {
                user_id: r.get("id"),
                email: r.get("email"),
                name: r.get("name"),
                is_creator: r.get("is_creator"),
            })
            .collect())
    }
}

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::application::ports::task_repository::{TaskPatch, TaskRepository};
use crate::domain::tasks::task::{Task, TaskStatus};
use crate::infrastructure::db::PgPool;

pub struct SqlxTaskRepository {
    pub pool: PgPool,
}

impl SqlxTaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const TASK_COLUMNS: &str =
    "id, creator_id, title, description, status, budget, due_date, created_at, updated_at";

fn map_task(row: &PgRow) -> anyhow::Result<Task> {
    let status: String = row.get("status");
    Ok(Task {
        id: row.get("id"),
        creator_id: row.get("creator_id"),
        title: row.get("title"),
        description: row.get("description"),
        status: status.parse::<TaskStatus>()?,
        budget: row.get("budget"),
        due_date: row.get("due_date"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}

#[async_trait]
impl TaskRepository for SqlxTaskRepository {
    async fn create(
        &self,
        creator_id: Uuid,
        title: &str,
        description: Option<&str>,
        budget: Decimal,
        due_date: Option<chrono::NaiveDate>,
    ) -> anyhow::Result<Task> {
        let row = sqlx::query(&format!(
            r#"INSERT INTO tasks (creator_id, title, description, budget, due_date)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING {TASK_COLUMNS}"#
        ))
        .bind(creator_id)
        .bind(title)
        .bind(description)
        .bind(budget)
        .bind(due_date)
        .fetch_one(&self.pool)
        .await?;
        map_task(&row)
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Task>> {
        let row = sqlx::query(&format!(
            r#"SELECT {TASK_COLUMNS} FROM tasks WHERE id = $1"#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(map_task).transpose()
    }

    async fn list_all(&self, status: Option<TaskStatus>) -> anyhow::Result<Vec<Task>> {
        let rows = sqlx::query(&format!(
            r#"SELECT {TASK_COLUMNS} FROM tasks
               WHERE ($1::TEXT IS NULL OR status = $1)
               ORDER BY created_at DESC"#
        ))
        .bind(status.map(|s| s.as_str()))
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(map_task).collect()
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
        status: Option<TaskStatus>,
    ) -> anyhow::Result<Vec<Task>> {
        let rows = sqlx::query(
            r#"SELECT DISTINCT t.id, t.creator_id, t.title, t.description, t.status, t.budget,
                      t.due_date, t.created_at, t.updated_at
               FROM tasks t
               LEFT JOIN user_tasks ut ON ut.task_id = t.id
               WHERE (t.creator_id = $1 OR ut.user_id = $1)
                 AND ($2::TEXT IS NULL OR t.status = $2)
               ORDER BY t.created_at DESC"#,
        )
        .bind(user_id)
        .bind(status.map(|s| s.as_str()))
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(map_task).collect()
    }

    async fn list_contributing(&self, user_id: Uuid) -> anyhow::Result<Vec<Task>> {
        let rows = sqlx::query(
            r#"SELECT t.id, t.creator_id, t.title, t.description, t.status, t.budget,
                      t.due_date, t.created_at, t.updated_at
               FROM user_tasks ut
               JOIN tasks t ON t.id = ut.task_id
               WHERE ut.user_id = $1 AND t.creator_id <> $1
               ORDER BY t.created_at DESC"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(map_task).collect()
    }

    async fn update(&self, id: Uuid, patch: TaskPatch) -> anyhow::Result<Option<Task>> {
        // CASE WHEN flags carry the "clear this column" intent of the
        // double-Option fields through a single statement.
        let row = sqlx::query(&format!(
            r#"UPDATE tasks SET
                    title = COALESCE($1, title),
                    description = CASE WHEN $2 THEN $3 ELSE description END,
                    status = COALESCE($4, status),
                    budget = COALESCE($5, budget),
                    due_date = CASE WHEN $6 THEN $7 ELSE due_date END,
                    updated_at = now()
                WHERE id = $8
                RETURNING {TASK_COLUMNS}"#
        ))
        .bind(patch.title)
        .bind(patch.description.is_some())
        .bind(patch.description.flatten())
        .bind(patch.status.map(|s| s.as_str()))
        .bind(patch.budget)
        .bind(patch.due_date.is_some())
        .bind(patch.due_date.flatten())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(map_task).transpose()
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}

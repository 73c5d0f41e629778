use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::application::ports::designation_repository::DesignationRepository;
use crate::domain::orgs::designation::Designation;
use crate::infrastructure::db::PgPool;

pub struct SqlxDesignationRepository {
    pub pool: PgPool,
}

impl SqlxDesignationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_designation(row: &PgRow) -> Designation {
    Designation {
        id: row.get("id"),
        enterprise_id: row.get("enterprise_id"),
        title: row.get("title"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

#[async_trait]
impl DesignationRepository for SqlxDesignationRepository {
    async fn create(&self, enterprise_id: Uuid, title: &str) -> anyhow::Result<Designation> {
        let row = sqlx::query(
            r#"INSERT INTO designations (enterprise_id, title) VALUES ($1, $2)
               RETURNING id, enterprise_id, title, created_at, updated_at"#,
        )
        .bind(enterprise_id)
        .bind(title)
        .fetch_one(&self.pool)
        .await?;
        Ok(map_designation(&row))
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Designation>> {
        let row = sqlx::query(
            r#"SELECT id, enterprise_id, title, created_at, updated_at
               FROM designations WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_designation))
    }

    async fn list(&self, enterprise_id: Option<Uuid>) -> anyhow::Result<Vec<Designation>> {
        let rows = sqlx::query(
            r#"SELECT id, enterprise_id, title, created_at, updated_at
               FROM designations
               WHERE ($1::UUID IS NULL OR enterprise_id = $1)
               ORDER BY title"#,
        )
        .bind(enterprise_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(map_designation).collect())
    }

    async fn update(&self, id: Uuid, title: String) -> anyhow::Result<Option<Designation>> {
        let row = sqlx::query(
            r#"UPDATE designations SET title = $1, updated_at = now()
                WHERE id = $2
                RETURNING id, enterprise_id, title, created_at, updated_at"#,
        )
        .bind(title)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_designation))
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM designations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}

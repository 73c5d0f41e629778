use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::application::ports::enterprise_repository::EnterpriseRepository;
use crate::domain::orgs::enterprise::Enterprise;
use crate::infrastructure::db::PgPool;

pub struct SqlxEnterpriseRepository {
    pub pool: PgPool,
}

impl SqlxEnterpriseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_enterprise(row: &PgRow) -> Enterprise {
    Enterprise {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

#[async_trait]
impl EnterpriseRepository for SqlxEnterpriseRepository {
    async fn create(&self, name: &str, description: Option<&str>) -> anyhow::Result<Enterprise> {
        let row = sqlx::query(
            r#"INSERT INTO enterprises (name, description) VALUES ($1, $2)
               RETURNING id, name, description, created_at, updated_at"#,
        )
        .bind(name)
        .bind(description)
        .fetch_one(&self.pool)
        .await?;
        Ok(map_enterprise(&row))
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Enterprise>> {
        let row = sqlx::query(
            r#"SELECT id, name, description, created_at, updated_at
               FROM enterprises WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_enterprise))
    }

    async fn list(&self) -> anyhow::Result<Vec<Enterprise>> {
        let rows = sqlx::query(
            r#"SELECT id, name, description, created_at, updated_at
               FROM enterprises ORDER BY name"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(map_enterprise).collect())
    }

    async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        description: Option<Option<String>>,
    ) -> anyhow::Result<Option<Enterprise>> {
        let row = sqlx::query(
            r#"UPDATE enterprises SET
                    name = COALESCE($1, name),
                    description = CASE WHEN $2 THEN $3 ELSE description END,
                    updated_at = now()
                WHERE id = $4
                RETURNING id, name, description, created_at, updated_at"#,
        )
        .bind(name)
        .bind(description.is_some())
        .bind(description.flatten())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_enterprise))
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM enterprises WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}

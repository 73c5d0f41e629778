use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::application::ports::department_repository::DepartmentRepository;
use crate::domain::orgs::department::Department;
use crate::infrastructure::db::PgPool;

pub struct SqlxDepartmentRepository {
    pub pool: PgPool,
}

impl SqlxDepartmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_department(row: &PgRow) -> Department {
    Department {
        id: row.get("id"),
        enterprise_id: row.get("enterprise_id"),
        name: row.get("name"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

#[async_trait]
impl DepartmentRepository for SqlxDepartmentRepository {
    async fn create(&self, enterprise_id: Uuid, name: &str) -> anyhow::Result<Department> {
        let row = sqlx::query(
            r#"INSERT INTO departments (enterprise_id, name) VALUES ($1, $2)
               RETURNING id, enterprise_id, name, created_at, updated_at"#,
        )
        .bind(enterprise_id)
        .bind(name)
        .fetch_one(&self.pool)
        .await?;
        Ok(map_department(&row))
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Department>> {
        let row = sqlx::query(
            r#"SELECT id, enterprise_id, name, created_at, updated_at
               FROM departments WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_department))
    }

    async fn list(&self, enterprise_id: Option<Uuid>) -> anyhow::Result<Vec<Department>> {
        let rows = sqlx::query(
            r#"SELECT id, enterprise_id, name, created_at, updated_at
               FROM departments
               WHERE ($1::UUID IS NULL OR enterprise_id = $1)
               ORDER BY name"#,
        )
        .bind(enterprise_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(map_department).collect())
    }

    async fn update(&self, id: Uuid, name: String) -> anyhow::Result<Option<Department>> {
        let row = sqlx::query(
            r#"UPDATE departments SET name = $1, updated_at = now()
                WHERE id = $2
                RETURNING id, enterprise_id, name, created_at, updated_at"#,
        )
        .bind(name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_department))
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}

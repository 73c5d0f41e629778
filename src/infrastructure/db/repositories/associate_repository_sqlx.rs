use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::application::ports::associate_repository::{AssociatePatch, AssociateRepository};
use crate::domain::orgs::associate::{Associate, AssociateDetail};
use crate::infrastructure::db::PgPool;

pub struct SqlxAssociateRepository {
    pub pool: PgPool,
}

impl SqlxAssociateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const ASSOCIATE_COLUMNS: &str =
    "id, user_id, enterprise_id, department_id, designation_id, hired_on, created_at, updated_at";

// Joined projection for listings and the profile endpoint.
const DETAIL_QUERY: &str = r#"
    SELECT a.id, a.user_id, u.name AS user_name, u.email AS user_email,
           a.enterprise_id, e.name AS enterprise_name,
           a.department_id, d.name AS department_name,
           a.designation_id, g.title AS designation_title,
           a.hired_on
    FROM associates a
    JOIN users u ON u.id = a.user_id
    JOIN enterprises e ON e.id = a.enterprise_id
    LEFT JOIN departments d ON d.id = a.department_id
    LEFT JOIN designations g ON g.id = a.designation_id
"#;

fn map_associate(row: &PgRow) -> Associate {
    Associate {
        id: row.get("id"),
        user_id: row.get("user_id"),
        enterprise_id: row.get("enterprise_id"),
        department_id: row.get("department_id"),
        designation_id: row.get("designation_id"),
        hired_on: row.get("hired_on"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn map_detail(row: &PgRow) -> AssociateDetail {
    AssociateDetail {
        id: row.get("id"),
        user_id: row.get("user_id"),
        user_name: row.get("user_name"),
        user_email: row.get("user_email"),
        enterprise_id: row.get("enterprise_id"),
        enterprise_name: row.get("enterprise_name"),
        department_id: row.get("department_id"),
        department_name: row.get("department_name"),
        designation_id: row.get("designation_id"),
        designation_title: row.get("designation_title"),
        hired_on: row.get("hired_on"),
    }
}

#[async_trait]
impl AssociateRepository for SqlxAssociateRepository {
    async fn create(
        &self,
        user_id: Uuid,
        enterprise_id: Uuid,
        department_id: Option<Uuid>,
        designation_id: Option<Uuid>,
        hired_on: Option<chrono::NaiveDate>,
    ) -> anyhow::Result<Associate> {
        let row = sqlx::query(&format!(
            r#"INSERT INTO associates (user_id, enterprise_id, department_id, designation_id, hired_on)
               VALUES ($1, $2, $3, $4, COALESCE($5, CURRENT_DATE))
               RETURNING {ASSOCIATE_COLUMNS}"#
        ))
        .bind(user_id)
        .bind(enterprise_id)
        .bind(department_id)
        .bind(designation_id)
        .bind(hired_on)
        .fetch_one(&self.pool)
        .await?;
        Ok(map_associate(&row))
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Associate>> {
        let row = sqlx::query(&format!(
            r#"SELECT {ASSOCIATE_COLUMNS} FROM associates WHERE id = $1"#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_associate))
    }

    async fn get_detail(&self, id: Uuid) -> anyhow::Result<Option<AssociateDetail>> {
        let row = sqlx::query(&format!("{DETAIL_QUERY} WHERE a.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(map_detail))
    }

    async fn find_by_user(&self, user_id: Uuid) -> anyhow::Result<Option<Associate>> {
        let row = sqlx::query(&format!(
            r#"SELECT {ASSOCIATE_COLUMNS} FROM associates WHERE user_id = $1"#
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_associate))
    }

    async fn find_detail_by_user(&self, user_id: Uuid) -> anyhow::Result<Option<AssociateDetail>> {
        let row = sqlx::query(&format!("{DETAIL_QUERY} WHERE a.user_id = $1"))
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(map_detail))
    }

    async fn list(&self, enterprise_id: Option<Uuid>) -> anyhow::Result<Vec<AssociateDetail>> {
        let rows = sqlx::query(&format!(
            "{DETAIL_QUERY} WHERE ($1::UUID IS NULL OR a.enterprise_id = $1) ORDER BY u.name"
        ))
        .bind(enterprise_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(map_detail).collect())
    }

    async fn update(&self, id: Uuid, patch: AssociatePatch) -> anyhow::Result<Option<Associate>> {
        let row = sqlx::query(&format!(
            r#"UPDATE associates SET
                    department_id = CASE WHEN $1 THEN $2 ELSE department_id END,
                    designation_id = CASE WHEN $3 THEN $4 ELSE designation_id END,
                    hired_on = COALESCE($5, hired_on),
                    updated_at = now()
                WHERE id = $6
                RETURNING {ASSOCIATE_COLUMNS}"#
        ))
        .bind(patch.department_id.is_some())
        .bind(patch.department_id.flatten())
        .bind(patch.designation_id.is_some())
        .bind(patch.designation_id.flatten())
        .bind(patch.hired_on)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_associate))
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM associates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::application::ports::expense_repository::ExpenseRepository;
use crate::domain::expenses::expense::Expense;
use crate::infrastructure::db::PgPool;

pub struct SqlxExpenseRepository {
    pub pool: PgPool,
}

impl SqlxExpenseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const EXPENSE_COLUMNS: &str =
    "id, task_id, author_id, description, amount, incurred_on, created_at, updated_at";

fn map_expense(row: &PgRow) -> Expense {
    Expense {
        id: row.get("id"),
        task_id: row.get("task_id"),
        author_id: row.get("author_id"),
        description: row.get("description"),
        amount: row.get("amount"),
        incurred_on: row.get("incurred_on"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

#[async_trait]
impl ExpenseRepository for SqlxExpenseRepository {
    async fn create(
        &self,
        task_id: Uuid,
        author_id: Uuid,
        description: &str,
        amount: Decimal,
        incurred_on: Option<chrono::NaiveDate>,
    ) -> anyhow::Result<Expense> {
        let row = sqlx::query(&format!(
            r#"INSERT INTO expenses (task_id, author_id, description, amount, incurred_on)
               VALUES ($1, $2, $3, $4, COALESCE($5, CURRENT_DATE))
               RETURNING {EXPENSE_COLUMNS}"#
        ))
        .bind(task_id)
        .bind(author_id)
        .bind(description)
        .bind(amount)
        .bind(incurred_on)
        .fetch_one(&self.pool)
        .await?;
        Ok(map_expense(&row))
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Expense>> {
        let row = sqlx::query(&format!(
            r#"SELECT {EXPENSE_COLUMNS} FROM expenses WHERE id = $1"#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_expense))
    }

    async fn list_for_task(&self, task_id: Uuid) -> anyhow::Result<Vec<Expense>> {
        let rows = sqlx::query(&format!(
            r#"SELECT {EXPENSE_COLUMNS} FROM expenses
               WHERE task_id = $1 ORDER BY incurred_on DESC, created_at DESC"#
        ))
        .bind(task_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(map_expense).collect())
    }

    async fn sum_for_task(&self, task_id: Uuid) -> anyhow::Result<Decimal> {
        let row = sqlx::query(
            r#"SELECT COALESCE(SUM(amount), 0) AS spent FROM expenses WHERE task_id = $1"#,
        )
        .bind(task_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.get("spent"))
    }

    async fn update(
        &self,
        id: Uuid,
        description: Option<String>,
        amount: Option<Decimal>,
        incurred_on: Option<chrono::NaiveDate>,
    ) -> anyhow::Result<Option<Expense>> {
        let row = sqlx::query(&format!(
            r#"UPDATE expenses SET
                    description = COALESCE($1, description),
                    amount = COALESCE($2, amount),
                    incurred_on = COALESCE($3, incurred_on),
                    updated_at = now()
                WHERE id = $4
                RETURNING {EXPENSE_COLUMNS}"#
        ))
        .bind(description)
        .bind(amount)
        .bind(incurred_on)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_expense))
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM expenses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}

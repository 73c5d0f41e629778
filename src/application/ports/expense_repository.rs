use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::expenses::expense::Expense;

#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    async fn create(
        &self,
        task_id: Uuid,
        author_id: Uuid,
        description: &str,
        amount: Decimal,
        incurred_on: Option<chrono::NaiveDate>,
    ) -> anyhow::Result<Expense>;

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Expense>>;

    async fn list_for_task(&self, task_id: Uuid) -> anyhow::Result<Vec<Expense>>;

    async fn sum_for_task(&self, task_id: Uuid) -> anyhow::Result<Decimal>;

    async fn update(
        &self,
        id: Uuid,
        description: Option<String>,
        amount: Option<Decimal>,
        incurred_on: Option<chrono::NaiveDate>,
    ) -> anyhow::Result<Option<Expense>>;

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
}

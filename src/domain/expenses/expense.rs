use rust_decimal::Decimal;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Expense {
    pub id: Uuid,
    pub task_id: Uuid,
    pub author_id: Uuid,
    pub description: String,
    pub amount: Decimal,
    pub incurred_on: chrono::NaiveDate,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Spend position of a task. `remaining` goes negative once logged
/// expenses exceed the budget; overruns are reported, not rejected.
#[derive(Debug, Clone)]
pub struct ExpenseSummary {
    pub task_id: Uuid,
    pub budget: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
}

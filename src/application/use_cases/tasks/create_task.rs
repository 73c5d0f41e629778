use rust_decimal::Decimal;
use uuid::Uuid;

use crate::application::ports::task_repository::TaskRepository;
use crate::application::use_cases::ActionError;
use crate::domain::tasks::task::Task;

pub struct CreateTask<'a, R: TaskRepository + ?Sized> {
    pub repo: &'a R,
}

#[derive(Debug, Clone)]
pub struct CreateTaskInput {
    pub title: String,
    pub description: Option<String>,
    pub budget: Option<Decimal>,
    pub due_date: Option<chrono::NaiveDate>,
}

impl<'a, R: TaskRepository + ?Sized> CreateTask<'a, R> {
    pub async fn execute(
        &self,
        creator_id: Uuid,
        input: CreateTaskInput,
    ) -> Result<Task, ActionError> {
        if input.title.trim().is_empty() {
            return Err(ActionError::invalid("title must not be empty"));
        }
        let budget = input.budget.unwrap_or(Decimal::ZERO);
        if budget < Decimal::ZERO {
            return Err(ActionError::invalid("budget must not be negative"));
        }
        let task = self
            .repo
            .create(
                creator_id,
                input.title.trim(),
                input.description.as_deref(),
                budget,
                input.due_date,
            )
            .await?;
        Ok(task)
    }
}

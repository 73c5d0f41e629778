use uuid::Uuid;

use crate::application::access::{self, Actor};
use crate::application::ports::collaborator_repository::CollaboratorRepository;
use crate::application::ports::expense_repository::ExpenseRepository;
use crate::application::ports::task_repository::TaskRepository;
use crate::application::use_cases::ActionError;
use crate::domain::expenses::expense::ExpenseSummary;

pub struct GetExpenseSummary<'a, R, M, E>
where
    R: TaskRepository + ?Sized,
    M: CollaboratorRepository + ?Sized,
    E: ExpenseRepository + ?Sized,
{
    pub repo: &'a R,
    pub members: &'a M,
    pub expenses: &'a E,
}

impl<'a, R, M, E> GetExpenseSummary<'a, R, M, E>
where
    R: TaskRepository + ?Sized,
    M: CollaboratorRepository + ?Sized,
    E: ExpenseRepository + ?Sized,
{
    pub async fn execute(
        &self,
        actor: &Actor,
        task_id: Uuid,
    ) -> Result<ExpenseSummary, ActionError> {
        let task = self
            .repo
            .get_by_id(task_id)
            .await?
            .ok_or(ActionError::NotFound)?;
        access::require_view(self.members, actor, &task).await?;

        let spent = self.expenses.sum_for_task(task_id).await?;
        Ok(ExpenseSummary {
            task_id,
            budget: task.budget,
            spent,
            remaining: task.budget - spent,
        })
    }
}

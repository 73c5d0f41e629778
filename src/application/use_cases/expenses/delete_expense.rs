use uuid::Uuid;

use crate::application::access::{self, Actor, TaskCapability};
use crate::application::ports::collaborator_repository::CollaboratorRepository;
use crate::application::ports::expense_repository::ExpenseRepository;
use crate::application::ports::task_repository::TaskRepository;
use crate::application::use_cases::ActionError;

pub struct DeleteExpense<'a, R, M, E>
where
    R: TaskRepository + ?Sized,
    M: CollaboratorRepository + ?Sized,
    E: ExpenseRepository + ?Sized,
{
    pub repo: &'a R,
    pub members: &'a M,
    pub expenses: &'a E,
}

impl<'a, R, M, E> DeleteExpense<'a, R, M, E>
where
    R: TaskRepository + ?Sized,
    M: CollaboratorRepository + ?Sized,
    E: ExpenseRepository + ?Sized,
{
    pub async fn execute(&self, actor: &Actor, id: Uuid) -> Result<(), ActionError> {
        let expense = self
            .expenses
            .get_by_id(id)
            .await?
            .ok_or(ActionError::NotFound)?;
        let task = self
            .repo
            .get_by_id(expense.task_id)
            .await?
            .ok_or(ActionError::NotFound)?;
        let cap = access::resolve_task(self.members, actor, &task).await;
        if cap < TaskCapability::View {
            return Err(ActionError::NotFound);
        }
        if !access::can_edit_expense(cap, actor, &expense) {
            return Err(ActionError::Forbidden);
        }

        let deleted = self.expenses.delete(id).await?;
        if !deleted {
            return Err(ActionError::NotFound);
        }
        Ok(())
    }
}

use uuid::Uuid;

use crate::application::access::{self, Actor, TaskCapability};
use crate::application::ports::collaborator_repository::CollaboratorRepository;
use crate::application::ports::expense_repository::ExpenseRepository;
use crate::application::ports::task_repository::TaskRepository;
use crate::domain::expenses::expense::Expense;

/// Single-expense lookup. Visibility follows the owning task; an actor who
/// cannot view the task gets None, same as a missing row.
pub struct GetExpense<'a, R, M, E>
where
    R: TaskRepository + ?Sized,
    M: CollaboratorRepository + ?Sized,
    E: ExpenseRepository + ?Sized,
{
    pub repo: &'a R,
    pub members: &'a M,
    pub expenses: &'a E,
}

impl<'a, R, M, E> GetExpense<'a, R, M, E>
where
    R: TaskRepository + ?Sized,
    M: CollaboratorRepository + ?Sized,
    E: ExpenseRepository + ?Sized,
{
    pub async fn execute(&self, actor: &Actor, id: Uuid) -> anyhow::Result<Option<Expense>> {
        let expense = match self.expenses.get_by_id(id).await? {
            Some(e) => e,
            None => return Ok(None),
        };
        let task = match self.repo.get_by_id(expense.task_id).await? {
            Some(t) => t,
            None => return Ok(None),
        };
        let cap = access::resolve_task(self.members, actor, &task).await;
        if cap < TaskCapability::View {
            return Ok(None);
        }
        Ok(Some(expense))
    }
}

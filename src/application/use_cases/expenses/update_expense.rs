use rust_decimal::Decimal;
use uuid::Uuid;

use crate::application::access::{self, Actor, TaskCapability};
use crate::application::ports::collaborator_repository::CollaboratorRepository;
use crate::application::ports::expense_repository::ExpenseRepository;
use crate::application::ports::task_repository::TaskRepository;
use crate::application::use_cases::ActionError;
use crate::domain::expenses::expense::Expense;

pub struct UpdateExpense<'a, R, M, E>
where
    R: TaskRepository + ?Sized,
    M: CollaboratorRepository + ?Sized,
    E: ExpenseRepository + ?Sized,
{
    pub repo: &'a R,
    pub members: &'a M,
    pub expenses: &'a E,
}

impl<'a, R, M, E> UpdateExpense<'a, R, M, E>
where
    R: TaskRepository + ?Sized,
    M: CollaboratorRepository + ?Sized,
    E: ExpenseRepository + ?Sized,
{
    /// Author-or-manager rule: a collaborator edits only what they logged,
    /// a manager edits anything on the task.
    pub async fn execute(
        &self,
        actor: &Actor,
        id: Uuid,
        description: Option<String>,
        amount: Option<Decimal>,
        incurred_on: Option<chrono::NaiveDate>,
    ) -> Result<Expense, ActionError> {
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

        if let Some(description) = &description {
            if description.trim().is_empty() {
                return Err(ActionError::invalid("description must not be empty"));
            }
        }
        if let Some(amount) = amount {
            if amount <= Decimal::ZERO {
                return Err(ActionError::invalid("amount must be positive"));
            }
        }

        let updated = self
            .expenses
            .update(id, description, amount, incurred_on)
            .await?
            .ok_or(ActionError::NotFound)?;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{MemExpenses, MemTaskStore};
    use crate::domain::users::user::Role;

    #[tokio::test]
    async fn author_amends_own_entry() {
        let store = MemTaskStore::new();
        let expenses = MemExpenses::new();
        let helper = Uuid::new_v4();
        let task = store.seed_task(Uuid::new_v4(), "amend", Decimal::ZERO);
        store.seed_member(task.id, helper);
        let expense = expenses.seed(task.id, helper, Decimal::new(100, 2));

        let uc = UpdateExpense {
            repo: &store,
            members: &store,
            expenses: &expenses,
        };
        let actor = Actor::new(helper, Role::User);
        let updated = uc
            .execute(&actor, expense.id, None, Some(Decimal::new(250, 2)), None)
            .await
            .unwrap();
        assert_eq!(updated.amount, Decimal::new(250, 2));
    }

    #[tokio::test]
    async fn peer_collaborator_cannot_amend_it() {
        let store = MemTaskStore::new();
        let expenses = MemExpenses::new();
        let author = Uuid::new_v4();
        let peer = Uuid::new_v4();
        let task = store.seed_task(Uuid::new_v4(), "amend", Decimal::ZERO);
        store.seed_member(task.id, author);
        store.seed_member(task.id, peer);
        let expense = expenses.seed(task.id, author, Decimal::new(100, 2));

        let uc = UpdateExpense {
            repo: &store,
            members: &store,
            expenses: &expenses,
        };
        let actor = Actor::new(peer, Role::User);
        assert!(matches!(
            uc.execute(&actor, expense.id, None, Some(Decimal::ONE), None)
                .await,
            Err(ActionError::Forbidden)
        ));
    }

    #[tokio::test]
    async fn task_creator_amends_any_entry() {
        let store = MemTaskStore::new();
        let expenses = MemExpenses::new();
        let creator = Uuid::new_v4();
        let helper = Uuid::new_v4();
        let task = store.seed_task(creator, "amend", Decimal::ZERO);
        store.seed_member(task.id, helper);
        let expense = expenses.seed(task.id, helper, Decimal::new(100, 2));

        let uc = UpdateExpense {
            repo: &store,
            members: &store,
            expenses: &expenses,
        };
        let actor = Actor::new(creator, Role::User);
        assert!(
            uc.execute(&actor, expense.id, Some("corrected".into()), None, None)
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn non_positive_amount_is_rejected() {
        let store = MemTaskStore::new();
        let expenses = MemExpenses::new();
        let helper = Uuid::new_v4();
        let task = store.seed_task(Uuid::new_v4(), "amend", Decimal::ZERO);
        store.seed_member(task.id, helper);
        let expense = expenses.seed(task.id, helper, Decimal::new(100, 2));

        let uc = UpdateExpense {
            repo: &store,
            members: &store,
            expenses: &expenses,
        };
        let actor = Actor::new(helper, Role::User);
        assert!(matches!(
            uc.execute(&actor, expense.id, None, Some(Decimal::ZERO), None)
                .await,
            Err(ActionError::Invalid(_))
        ));
    }
}

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::application::access::{self, Actor};
use crate::application::ports::collaborator_repository::CollaboratorRepository;
use crate::application::ports::expense_repository::ExpenseRepository;
use crate::application::ports::task_repository::TaskRepository;
use crate::application::use_cases::ActionError;
use crate::domain::expenses::expense::Expense;

pub struct LogExpense<'a, R, M, E>
where
    R: TaskRepository + ?Sized,
    M: CollaboratorRepository + ?Sized,
    E: ExpenseRepository + ?Sized,
{
    pub repo: &'a R,
    pub members: &'a M,
    pub expenses: &'a E,
}

#[derive(Debug, Clone)]
pub struct LogExpenseInput {
    pub description: String,
    pub amount: Decimal,
    pub incurred_on: Option<chrono::NaiveDate>,
}

impl<'a, R, M, E> LogExpense<'a, R, M, E>
where
    R: TaskRepository + ?Sized,
    M: CollaboratorRepository + ?Sized,
    E: ExpenseRepository + ?Sized,
{
    /// Contributors and managers may log spend. Overrunning the budget is
    /// allowed; the summary endpoint reports the negative remainder.
    pub async fn execute(
        &self,
        actor: &Actor,
        task_id: Uuid,
        input: LogExpenseInput,
    ) -> Result<Expense, ActionError> {
        let task = self
            .repo
            .get_by_id(task_id)
            .await?
            .ok_or(ActionError::NotFound)?;
        access::require_contribute(self.members, actor, &task).await?;

        let description = input.description.trim();
        if description.is_empty() {
            return Err(ActionError::invalid("description must not be empty"));
        }
        if input.amount <= Decimal::ZERO {
            return Err(ActionError::invalid("amount must be positive"));
        }

        let expense = self
            .expenses
            .create(task_id, actor.id, description, input.amount, input.incurred_on)
            .await?;
        Ok(expense)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{MemExpenses, MemTaskStore};
    use crate::domain::users::user::Role;

    fn input(amount: Decimal) -> LogExpenseInput {
        LogExpenseInput {
            description: "rail tickets".into(),
            amount,
            incurred_on: None,
        }
    }

    #[tokio::test]
    async fn collaborator_logs_spend() {
        let store = MemTaskStore::new();
        let expenses = MemExpenses::new();
        let helper = Uuid::new_v4();
        let task = store.seed_task(Uuid::new_v4(), "site visit", Decimal::new(10_000, 2));
        store.seed_member(task.id, helper);

        let uc = LogExpense {
            repo: &store,
            members: &store,
            expenses: &expenses,
        };
        let actor = Actor::new(helper, Role::User);
        let logged = uc
            .execute(&actor, task.id, input(Decimal::new(2_500, 2)))
            .await
            .unwrap();
        assert_eq!(logged.author_id, helper);
        assert_eq!(logged.task_id, task.id);
    }

    #[tokio::test]
    async fn stranger_cannot_log_spend() {
        let store = MemTaskStore::new();
        let expenses = MemExpenses::new();
        let task = store.seed_task(Uuid::new_v4(), "site visit", Decimal::ZERO);

        let uc = LogExpense {
            repo: &store,
            members: &store,
            expenses: &expenses,
        };
        let actor = Actor::new(Uuid::new_v4(), Role::User);
        assert!(matches!(
            uc.execute(&actor, task.id, input(Decimal::ONE)).await,
            Err(ActionError::NotFound)
        ));
    }

    #[tokio::test]
    async fn zero_and_negative_amounts_are_rejected() {
        let store = MemTaskStore::new();
        let expenses = MemExpenses::new();
        let creator = Uuid::new_v4();
        let task = store.seed_task(creator, "site visit", Decimal::ZERO);

        let uc = LogExpense {
            repo: &store,
            members: &store,
            expenses: &expenses,
        };
        let actor = Actor::new(creator, Role::User);
        for amount in [Decimal::ZERO, Decimal::new(-100, 2)] {
            assert!(matches!(
                uc.execute(&actor, task.id, input(amount)).await,
                Err(ActionError::Invalid(_))
            ));
        }
    }

    #[tokio::test]
    async fn spend_past_the_budget_is_accepted() {
        let store = MemTaskStore::new();
        let expenses = MemExpenses::new();
        let creator = Uuid::new_v4();
        let task = store.seed_task(creator, "site visit", Decimal::new(1_000, 2));

        let uc = LogExpense {
            repo: &store,
            members: &store,
            expenses: &expenses,
        };
        let actor = Actor::new(creator, Role::User);
        assert!(
            uc.execute(&actor, task.id, input(Decimal::new(99_999, 2)))
                .await
                .is_ok()
        );
    }
}

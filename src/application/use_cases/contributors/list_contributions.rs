use crate::application::access::Actor;
use crate::application::ports::task_repository::TaskRepository;
use crate::domain::tasks::task::Task;

/// Tasks the actor collaborates on without having created them.
pub struct ListContributions<'a, R: TaskRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: TaskRepository + ?Sized> ListContributions<'a, R> {
    pub async fn execute(&self, actor: &Actor) -> anyhow::Result<Vec<Task>> {
        self.repo.list_contributing(actor.id).await
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use uuid::Uuid;

    use super::*;
    use crate::application::testing::MemTaskStore;
    use crate::domain::users::user::Role;

    #[tokio::test]
    async fn own_tasks_are_excluded() {
        let store = MemTaskStore::new();
        let me = Uuid::new_v4();
        let mine = store.seed_task(me, "mine", Decimal::ZERO);
        let theirs = store.seed_task(Uuid::new_v4(), "theirs", Decimal::ZERO);
        store.seed_member(mine.id, me);
        store.seed_member(theirs.id, me);

        let uc = ListContributions { repo: &store };
        let actor = Actor::new(me, Role::User);
        let tasks = uc.execute(&actor).await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, theirs.id);
    }
}

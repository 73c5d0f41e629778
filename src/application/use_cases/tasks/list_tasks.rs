use crate::application::access::Actor;
use crate::application::ports::task_repository::TaskRepository;
use crate::domain::tasks::task::{Task, TaskStatus};

pub struct ListTasks<'a, R: TaskRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: TaskRepository + ?Sized> ListTasks<'a, R> {
    /// ADMIN/SUPER see every task; a plain USER sees only tasks they
    /// created or collaborate on.
    pub async fn execute(
        &self,
        actor: &Actor,
        status: Option<TaskStatus>,
    ) -> anyhow::Result<Vec<Task>> {
        if actor.role.is_elevated() {
            self.repo.list_all(status).await
        } else {
            self.repo.list_for_user(actor.id, status).await
        }
    }
}

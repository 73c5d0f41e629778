use uuid::Uuid;

use crate::application::ports::department_repository::DepartmentRepository;
use crate::domain::orgs::department::Department;

pub struct GetDepartment<'a, R: DepartmentRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: DepartmentRepository + ?Sized> GetDepartment<'a, R> {
    pub async fn execute(&self, id: Uuid) -> anyhow::Result<Option<Department>> {
        self.repo.get_by_id(id).await
    }
}

use uuid::Uuid;

use crate::application::ports::department_repository::DepartmentRepository;
use crate::domain::orgs::department::Department;

pub struct ListDepartments<'a, R: DepartmentRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: DepartmentRepository + ?Sized> ListDepartments<'a, R> {
    pub async fn execute(&self, enterprise_id: Option<Uuid>) -> anyhow::Result<Vec<Department>> {
        self.repo.list(enterprise_id).await
    }
}

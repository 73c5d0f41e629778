pub mod associate_repository_sqlx;
pub mod collaborator_repository_sqlx;
pub mod department_repository_sqlx;
pub mod designation_repository_sqlx;
pub mod enterprise_repository_sqlx;
pub mod expense_repository_sqlx;
pub mod refresh_token_repository_sqlx;
pub mod task_repository_sqlx;
pub mod user_repository_sqlx;

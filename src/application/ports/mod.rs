pub mod associate_repository;
pub mod collaborator_repository;
pub mod department_repository;
pub mod designation_repository;
pub mod enterprise_repository;
pub mod expense_repository;
pub mod refresh_token_repository;
pub mod task_cache;
pub mod task_repository;
pub mod user_repository;

use std::sync::Arc;

use crate::application::ports::associate_repository::AssociateRepository;
use crate::application::ports::collaborator_repository::CollaboratorRepository;
use crate::application::ports::department_repository::DepartmentRepository;
use crate::application::ports::designation_repository::DesignationRepository;
use crate::application::ports::enterprise_repository::EnterpriseRepository;
use crate::application::ports::expense_repository::ExpenseRepository;
use crate::application::ports::refresh_token_repository::RefreshTokenRepository;
use crate::application::ports::task_cache::TaskCache;
use crate::application::ports::task_repository::TaskRepository;
use crate::application::ports::user_repository::UserRepository;
use crate::bootstrap::config::Config;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

#[derive(Clone)]
pub struct AppServices {
    user_repo: Arc<dyn UserRepository>,
    task_repo: Arc<dyn TaskRepository>,
    collaborator_repo: Arc<dyn CollaboratorRepository>,
    expense_repo: Arc<dyn ExpenseRepository>,
    enterprise_repo: Arc<dyn EnterpriseRepository>,
    department_repo: Arc<dyn DepartmentRepository>,
    designation_repo: Arc<dyn DesignationRepository>,
    associate_repo: Arc<dyn AssociateRepository>,
    refresh_token_repo: Arc<dyn RefreshTokenRepository>,
    task_cache: Arc<dyn TaskCache>,
}

impl AppServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        task_repo: Arc<dyn TaskRepository>,
        collaborator_repo: Arc<dyn CollaboratorRepository>,
        expense_repo: Arc<dyn ExpenseRepository>,
        enterprise_repo: Arc<dyn EnterpriseRepository>,
        department_repo: Arc<dyn DepartmentRepository>,
        designation_repo: Arc<dyn DesignationRepository>,
        associate_repo: Arc<dyn AssociateRepository>,
        refresh_token_repo: Arc<dyn RefreshTokenRepository>,
        task_cache: Arc<dyn TaskCache>,
    ) -> Self {
        Self {
            user_repo,
            task_repo,
            collaborator_repo,
            expense_repo,
            enterprise_repo,
            department_repo,
            designation_repo,
            associate_repo,
            refresh_token_repo,
            task_cache,
        }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn user_repo(&self) -> Arc<dyn UserRepository> {
        self.services.user_repo.clone()
    }

    pub fn task_repo(&self) -> Arc<dyn TaskRepository> {
        self.services.task_repo.clone()
    }

    pub fn collaborator_repo(&self) -> Arc<dyn CollaboratorRepository> {
        self.services.collaborator_repo.clone()
    }

    pub fn expense_repo(&self) -> Arc<dyn ExpenseRepository> {
        self.services.expense_repo.clone()
    }

    pub fn enterprise_repo(&self) -> Arc<dyn EnterpriseRepository> {
        self.services.enterprise_repo.clone()
    }

    pub fn department_repo(&self) -> Arc<dyn DepartmentRepository> {
        self.services.department_repo.clone()
    }

    pub fn designation_repo(&self) -> Arc<dyn DesignationRepository> {
        self.services.designation_repo.clone()
    }

    pub fn associate_repo(&self) -> Arc<dyn AssociateRepository> {
        self.services.associate_repo.clone()
    }

    pub fn refresh_token_repo(&self) -> Arc<dyn RefreshTokenRepository> {
        self.services.refresh_token_repo.clone()
    }

    pub fn task_cache(&self) -> Arc<dyn TaskCache> {
        self.services.task_cache.clone()
    }
}

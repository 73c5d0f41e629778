//! In-memory port implementations shared by use-case tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::application::ports::associate_repository::{AssociatePatch, AssociateRepository};
use crate::application::ports::collaborator_repository::CollaboratorRepository;
use crate::application::ports::department_repository::DepartmentRepository;
use crate::application::ports::designation_repository::DesignationRepository;
use crate::application::ports::enterprise_repository::EnterpriseRepository;
use crate::application::ports::expense_repository::ExpenseRepository;
use crate::application::ports::task_cache::TaskCache;
use crate::application::ports::task_repository::{TaskPatch, TaskRepository};
use crate::application::ports::user_repository::{UserCredentials, UserRepository};
use crate::domain::expenses::expense::Expense;
use crate::domain::orgs::associate::{Associate, AssociateDetail};
use crate::domain::orgs::department::Department;
use crate::domain::orgs::designation::Designation;
use crate::domain::orgs::enterprise::Enterprise;
use crate::domain::tasks::task::{Contributor, Task, TaskStatus};
use crate::domain::users::user::{Role, User, UserSummary};

/// Tasks, membership, and user directory in one store, like the database
/// the production repositories share.
#[derive(Default)]
pub struct MemTaskStore {
    tasks: Mutex<HashMap<Uuid, Task>>,
    members: Mutex<HashSet<(Uuid, Uuid)>>,
    users: Mutex<HashMap<Uuid, UserSummary>>,
}

impl MemTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&self, id: Uuid, name: &str) {
        self.users.lock().unwrap().insert(
            id,
            UserSummary {
                id,
                email: format!("{name}@example.com"),
                name: name.to_string(),
            },
        );
    }

    pub fn seed_task(&self, creator_id: Uuid, title: &str, budget: Decimal) -> Task {
        let now = chrono::Utc::now();
        let task = Task {
            id: Uuid::new_v4(),
            creator_id,
            title: title.to_string(),
            description: None,
            status: TaskStatus::Open,
            budget,
            due_date: None,
            created_at: now,
            updated_at: now,
        };
        self.tasks.lock().unwrap().insert(task.id, task.clone());
        task
    }

    pub fn seed_member(&self, task_id: Uuid, user_id: Uuid) {
        self.members.lock().unwrap().insert((task_id, user_id));
    }
}

#[async_trait]
impl TaskRepository for MemTaskStore {
    async fn create(
        &self,
        creator_id: Uuid,
        title: &str,
        description: Option<&str>,
        budget: Decimal,
        due_date: Option<chrono::NaiveDate>,
    ) -> anyhow::Result<Task> {
        let now = chrono::Utc::now();
        let task = Task {
            id: Uuid::new_v4(),
            creator_id,
            title: title.to_string(),
            description: description.map(str::to_string),
            status: TaskStatus::Open,
            budget,
            due_date,
            created_at: now,
            updated_at: now,
        };
        self.tasks.lock().unwrap().insert(task.id, task.clone());
        Ok(task)
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Task>> {
        Ok(self.tasks.lock().unwrap().get(&id).cloned())
    }

    async fn list_all(&self, status: Option<TaskStatus>) -> anyhow::Result<Vec<Task>> {
        let mut out: Vec<Task> = self
            .tasks
            .lock()
            .unwrap()
            .values()
            .filter(|t| status.map_or(true, |s| t.status == s))
            .cloned()
            .collect();
        out.sort_by_key(|t| std::cmp::Reverse(t.created_at));
        Ok(out)
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
        status: Option<TaskStatus>,
    ) -> anyhow::Result<Vec<Task>> {
        let members = self.members.lock().unwrap();
        let mut out: Vec<Task> = self
            .tasks
            .lock()
            .unwrap()
            .values()
            .filter(|t| t.creator_id == user_id || members.contains(&(t.id, user_id)))
            .filter(|t| status.map_or(true, |s| t.status == s))
            .cloned()
            .collect();
        out.sort_by_key(|t| std::cmp::Reverse(t.created_at));
        Ok(out)
    }

    async fn list_contributing(&self, user_id: Uuid) -> anyhow::Result<Vec<Task>> {
        let members = self.members.lock().unwrap();
        Ok(self
            .tasks
            .lock()
            .unwrap()
            .values()
            .filter(|t| t.creator_id != user_id && members.contains(&(t.id, user_id)))
            .cloned()
            .collect())
    }

    async fn update(&self, id: Uuid, patch: TaskPatch) -> anyhow::Result<Option<Task>> {
        let mut tasks = self.tasks.lock().unwrap();
        Ok(tasks.get_mut(&id).map(|t| {
            if let Some(title) = patch.title {
                t.title = title;
            }
            if let Some(description) = patch.description {
                t.description = description;
            }
            if let Some(status) = patch.status {
                t.status = status;
            }
            if let Some(budget) = patch.budget {
                t.budget = budget;
            }
            if let Some(due_date) = patch.due_date {
                t.due_date = due_date;
            }
            t.updated_at = chrono::Utc::now();
            t.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let removed = self.tasks.lock().unwrap().remove(&id).is_some();
        if removed {
            self.members.lock().unwrap().retain(|(t, _)| *t != id);
        }
        Ok(removed)
    }
}

#[async_trait]
impl CollaboratorRepository for MemTaskStore {
    async fn add(&self, task_id: Uuid, user_id: Uuid) -> anyhow::Result<()> {
        if !self.members.lock().unwrap().insert((task_id, user_id)) {
            anyhow::bail!("duplicate membership");
        }
        Ok(())
    }

    async fn remove(&self, task_id: Uuid, user_id: Uuid) -> anyhow::Result<bool> {
        Ok(self.members.lock().unwrap().remove(&(task_id, user_id)))
    }

    async fn list(&self, task_id: Uuid) -> anyhow::Result<Vec<UserSummary>> {
        let users = self.users.lock().unwrap();
        Ok(self
            .members
            .lock()
            .unwrap()
            .iter()
            .filter(|(t, _)| *t == task_id)
            .filter_map(|(_, u)| users.get(u).cloned())
            .collect())
    }

    async fn is_member(&self, task_id: Uuid, user_id: Uuid) -> anyhow::Result<bool> {
        Ok(self.members.lock().unwrap().contains(&(task_id, user_id)))
    }

    async fn contributors(&self, task_id: Uuid) -> anyhow::Result<Vec<Contributor>> {
        let users = self.users.lock().unwrap();
        let creator_id = self
            .tasks
            .lock()
            .unwrap()
            .get(&task_id)
            .map(|t| t.creator_id);
        let mut out = Vec::new();
        if let Some(u) = creator_id.and_then(|id| users.get(&id)) {
            out.push(Contributor {
                user_id: u.id,
                email: u.email.clone(),
                name: u.name.clone(),
                is_creator: true,
            });
        }
        for (t, u) in self.members.lock().unwrap().iter() {
            if *t != task_id {
                continue;
            }
            if let Some(u) = users.get(u) {
                out.push(Contributor {
                    user_id: u.id,
                    email: u.email.clone(),
                    name: u.name.clone(),
                    is_creator: false,
                });
            }
        }
        Ok(out)
    }
}

#[derive(Default)]
pub struct MemUsers {
    rows: Mutex<HashMap<Uuid, User>>,
    hashes: Mutex<HashMap<Uuid, String>>,
}

impl MemUsers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, name: &str, role: Role) -> User {
        let now = chrono::Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: format!("{name}@example.com"),
            name: name.to_string(),
            role,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().insert(user.id, user.clone());
        user
    }

    pub fn seed_with_hash(&self, name: &str, password_hash: &str) -> User {
        let user = self.seed(name, Role::User);
        self.hashes
            .lock()
            .unwrap()
            .insert(user.id, password_hash.to_string());
        user
    }
}

#[async_trait]
impl UserRepository for MemUsers {
    async fn create_user(
        &self,
        email: &str,
        name: &str,
        password_hash: &str,
    ) -> anyhow::Result<User> {
        let mut rows = self.rows.lock().unwrap();
        if rows.values().any(|u| u.email == email) {
            anyhow::bail!("duplicate email");
        }
        let now = chrono::Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            name: name.to_string(),
            role: Role::User,
            created_at: now,
            updated_at: now,
        };
        rows.insert(user.id, user.clone());
        self.hashes
            .lock()
            .unwrap()
            .insert(user.id, password_hash.to_string());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<UserCredentials>> {
        let rows = self.rows.lock().unwrap();
        let hashes = self.hashes.lock().unwrap();
        Ok(rows.values().find(|u| u.email == email).map(|u| {
            UserCredentials {
                user: u.clone(),
                password_hash: hashes.get(&u.id).cloned().unwrap_or_default(),
            }
        }))
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn list_users(&self) -> anyhow::Result<Vec<User>> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn update_profile(
        &self,
        id: Uuid,
        name: Option<String>,
        password_hash: Option<String>,
    ) -> anyhow::Result<Option<User>> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.get_mut(&id).map(|u| {
            if let Some(name) = name {
                u.name = name;
            }
            if let Some(hash) = password_hash {
                self.hashes.lock().unwrap().insert(id, hash);
            }
            u.updated_at = chrono::Utc::now();
            u.clone()
        }))
    }

    async fn update_role(&self, id: Uuid, role: Role) -> anyhow::Result<Option<User>> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.get_mut(&id).map(|u| {
            u.role = role;
            u.updated_at = chrono::Utc::now();
            u.clone()
        }))
    }
}

#[derive(Default)]
pub struct MemExpenses {
    rows: Mutex<HashMap<Uuid, Expense>>,
}

impl MemExpenses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, task_id: Uuid, author_id: Uuid, amount: Decimal) -> Expense {
        let now = chrono::Utc::now();
        let expense = Expense {
            id: Uuid::new_v4(),
            task_id,
            author_id,
            description: "seeded".into(),
            amount,
            incurred_on: now.date_naive(),
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().insert(expense.id, expense.clone());
        expense
    }
}

#[async_trait]
impl ExpenseRepository for MemExpenses {
    async fn create(
        &self,
        task_id: Uuid,
        author_id: Uuid,
        description: &str,
        amount: Decimal,
        incurred_on: Option<chrono::NaiveDate>,
    ) -> anyhow::Result<Expense> {
        let now = chrono::Utc::now();
        let expense = Expense {
            id: Uuid::new_v4(),
            task_id,
            author_id,
            description: description.to_string(),
            amount,
            incurred_on: incurred_on.unwrap_or_else(|| now.date_naive()),
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().insert(expense.id, expense.clone());
        Ok(expense)
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Expense>> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn list_for_task(&self, task_id: Uuid) -> anyhow::Result<Vec<Expense>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|e| e.task_id == task_id)
            .cloned()
            .collect())
    }

    async fn sum_for_task(&self, task_id: Uuid) -> anyhow::Result<Decimal> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|e| e.task_id == task_id)
            .map(|e| e.amount)
            .sum())
    }

    async fn update(
        &self,
        id: Uuid,
        description: Option<String>,
        amount: Option<Decimal>,
        incurred_on: Option<chrono::NaiveDate>,
    ) -> anyhow::Result<Option<Expense>> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.get_mut(&id).map(|e| {
            if let Some(description) = description {
                e.description = description;
            }
            if let Some(amount) = amount {
                e.amount = amount;
            }
            if let Some(incurred_on) = incurred_on {
                e.incurred_on = incurred_on;
            }
            e.updated_at = chrono::Utc::now();
            e.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        Ok(self.rows.lock().unwrap().remove(&id).is_some())
    }
}

/// Org tables in one store: enterprises, departments, designations, and
/// associates, plus a user directory for the joined detail rows.
#[derive(Default)]
pub struct MemOrg {
    enterprises: Mutex<HashMap<Uuid, Enterprise>>,
    departments: Mutex<HashMap<Uuid, Department>>,
    designations: Mutex<HashMap<Uuid, Designation>>,
    associates: Mutex<HashMap<Uuid, Associate>>,
    directory: Mutex<HashMap<Uuid, UserSummary>>,
}

impl MemOrg {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&self, id: Uuid, name: &str) {
        self.directory.lock().unwrap().insert(
            id,
            UserSummary {
                id,
                email: format!("{name}@example.com"),
                name: name.to_string(),
            },
        );
    }

    pub fn seed_enterprise(&self, name: &str) -> Enterprise {
        let now = chrono::Utc::now();
        let enterprise = Enterprise {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: None,
            created_at: now,
            updated_at: now,
        };
        self.enterprises
            .lock()
            .unwrap()
            .insert(enterprise.id, enterprise.clone());
        enterprise
    }

    pub fn seed_department(&self, enterprise_id: Uuid, name: &str) -> Department {
        let now = chrono::Utc::now();
        let department = Department {
            id: Uuid::new_v4(),
            enterprise_id,
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.departments
            .lock()
            .unwrap()
            .insert(department.id, department.clone());
        department
    }

    pub fn seed_designation(&self, enterprise_id: Uuid, title: &str) -> Designation {
        let now = chrono::Utc::now();
        let designation = Designation {
            id: Uuid::new_v4(),
            enterprise_id,
            title: title.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.designations
            .lock()
            .unwrap()
            .insert(designation.id, designation.clone());
        designation
    }

    pub fn seed_associate(&self, user_id: Uuid, enterprise_id: Uuid) -> Associate {
        let now = chrono::Utc::now();
        let associate = Associate {
            id: Uuid::new_v4(),
            user_id,
            enterprise_id,
            department_id: None,
            designation_id: None,
            hired_on: now.date_naive(),
            created_at: now,
            updated_at: now,
        };
        self.associates
            .lock()
            .unwrap()
            .insert(associate.id, associate.clone());
        associate
    }

    fn detail(&self, associate: &Associate) -> AssociateDetail {
        let directory = self.directory.lock().unwrap();
        let enterprises = self.enterprises.lock().unwrap();
        let departments = self.departments.lock().unwrap();
        let designations = self.designations.lock().unwrap();
        let user = directory.get(&associate.user_id);
        AssociateDetail {
            id: associate.id,
            user_id: associate.user_id,
            user_name: user.map(|u| u.name.clone()).unwrap_or_default(),
            user_email: user.map(|u| u.email.clone()).unwrap_or_default(),
            enterprise_id: associate.enterprise_id,
            enterprise_name: enterprises
                .get(&associate.enterprise_id)
                .map(|e| e.name.clone())
                .unwrap_or_default(),
            department_id: associate.department_id,
            department_name: associate
                .department_id
                .and_then(|id| departments.get(&id))
                .map(|d| d.name.clone()),
            designation_id: associate.designation_id,
            designation_title: associate
                .designation_id
                .and_then(|id| designations.get(&id))
                .map(|d| d.title.clone()),
            hired_on: associate.hired_on,
        }
    }
}

#[async_trait]
impl EnterpriseRepository for MemOrg {
    async fn create(&self, name: &str, description: Option<&str>) -> anyhow::Result<Enterprise> {
        let mut enterprises = self.enterprises.lock().unwrap();
        if enterprises.values().any(|e| e.name == name) {
            anyhow::bail!("duplicate enterprise name");
        }
        let now = chrono::Utc::now();
        let enterprise = Enterprise {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: description.map(str::to_string),
            created_at: now,
            updated_at: now,
        };
        enterprises.insert(enterprise.id, enterprise.clone());
        Ok(enterprise)
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Enterprise>> {
        Ok(self.enterprises.lock().unwrap().get(&id).cloned())
    }

    async fn list(&self) -> anyhow::Result<Vec<Enterprise>> {
        Ok(self.enterprises.lock().unwrap().values().cloned().collect())
    }

    async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        description: Option<Option<String>>,
    ) -> anyhow::Result<Option<Enterprise>> {
        let mut enterprises = self.enterprises.lock().unwrap();
        Ok(enterprises.get_mut(&id).map(|e| {
            if let Some(name) = name {
                e.name = name;
            }
            if let Some(description) = description {
                e.description = description;
            }
            e.updated_at = chrono::Utc::now();
            e.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        Ok(self.enterprises.lock().unwrap().remove(&id).is_some())
    }
}

#[async_trait]
impl DepartmentRepository for MemOrg {
    async fn create(&self, enterprise_id: Uuid, name: &str) -> anyhow::Result<Department> {
        let mut departments = self.departments.lock().unwrap();
        if departments
            .values()
            .any(|d| d.enterprise_id == enterprise_id && d.name == name)
        {
            anyhow::bail!("duplicate department name");
        }
        let now = chrono::Utc::now();
        let department = Department {
            id: Uuid::new_v4(),
            enterprise_id,
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        };
        departments.insert(department.id, department.clone());
        Ok(department)
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Department>> {
        Ok(self.departments.lock().unwrap().get(&id).cloned())
    }

    async fn list(&self, enterprise_id: Option<Uuid>) -> anyhow::Result<Vec<Department>> {
        Ok(self
            .departments
            .lock()
            .unwrap()
            .values()
            .filter(|d| enterprise_id.map_or(true, |e| d.enterprise_id == e))
            .cloned()
            .collect())
    }

    async fn update(&self, id: Uuid, name: String) -> anyhow::Result<Option<Department>> {
        let mut departments = self.departments.lock().unwrap();
        Ok(departments.get_mut(&id).map(|d| {
            d.name = name;
            d.updated_at = chrono::Utc::now();
            d.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        Ok(self.departments.lock().unwrap().remove(&id).is_some())
    }
}

#[async_trait]
impl DesignationRepository for MemOrg {
    async fn create(&self, enterprise_id: Uuid, title: &str) -> anyhow::Result<Designation> {
        let mut designations = self.designations.lock().unwrap();
        if designations
            .values()
            .any(|d| d.enterprise_id == enterprise_id && d.title == title)
        {
            anyhow::bail!("duplicate designation title");
        }
        let now = chrono::Utc::now();
        let designation = Designation {
            id: Uuid::new_v4(),
            enterprise_id,
            title: title.to_string(),
            created_at: now,
            updated_at: now,
        };
        designations.insert(designation.id, designation.clone());
        Ok(designation)
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Designation>> {
        Ok(self.designations.lock().unwrap().get(&id).cloned())
    }

    async fn list(&self, enterprise_id: Option<Uuid>) -> anyhow::Result<Vec<Designation>> {
        Ok(self
            .designations
            .lock()
            .unwrap()
            .values()
            .filter(|d| enterprise_id.map_or(true, |e| d.enterprise_id == e))
            .cloned()
            .collect())
    }

    async fn update(&self, id: Uuid, title: String) -> anyhow::Result<Option<Designation>> {
        let mut designations = self.designations.lock().unwrap();
        Ok(designations.get_mut(&id).map(|d| {
            d.title = title;
            d.updated_at = chrono::Utc::now();
            d.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        Ok(self.designations.lock().unwrap().remove(&id).is_some())
    }
}

#[async_trait]
impl AssociateRepository for MemOrg {
    async fn create(
        &self,
        user_id: Uuid,
        enterprise_id: Uuid,
        department_id: Option<Uuid>,
        designation_id: Option<Uuid>,
        hired_on: Option<chrono::NaiveDate>,
    ) -> anyhow::Result<Associate> {
        let mut associates = self.associates.lock().unwrap();
        if associates.values().any(|a| a.user_id == user_id) {
            anyhow::bail!("duplicate associate for user");
        }
        let now = chrono::Utc::now();
        let associate = Associate {
            id: Uuid::new_v4(),
            user_id,
            enterprise_id,
            department_id,
            designation_id,
            hired_on: hired_on.unwrap_or_else(|| now.date_naive()),
            created_at: now,
            updated_at: now,
        };
        associates.insert(associate.id, associate.clone());
        Ok(associate)
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Associate>> {
        Ok(self.associates.lock().unwrap().get(&id).cloned())
    }

    async fn get_detail(&self, id: Uuid) -> anyhow::Result<Option<AssociateDetail>> {
        let found = self.associates.lock().unwrap().get(&id).cloned();
        Ok(found.map(|a| self.detail(&a)))
    }

    async fn find_by_user(&self, user_id: Uuid) -> anyhow::Result<Option<Associate>> {
        Ok(self
            .associates
            .lock()
            .unwrap()
            .values()
            .find(|a| a.user_id == user_id)
            .cloned())
    }

    async fn find_detail_by_user(&self, user_id: Uuid) -> anyhow::Result<Option<AssociateDetail>> {
        let found = self
            .associates
            .lock()
            .unwrap()
            .values()
            .find(|a| a.user_id == user_id)
            .cloned();
        Ok(found.map(|a| self.detail(&a)))
    }

    async fn list(&self, enterprise_id: Option<Uuid>) -> anyhow::Result<Vec<AssociateDetail>> {
        let rows: Vec<Associate> = self
            .associates
            .lock()
            .unwrap()
            .values()
            .filter(|a| enterprise_id.map_or(true, |e| a.enterprise_id == e))
            .cloned()
            .collect();
        Ok(rows.iter().map(|a| self.detail(a)).collect())
    }

    async fn update(&self, id: Uuid, patch: AssociatePatch) -> anyhow::Result<Option<Associate>> {
        let mut associates = self.associates.lock().unwrap();
        Ok(associates.get_mut(&id).map(|a| {
            if let Some(department_id) = patch.department_id {
                a.department_id = department_id;
            }
            if let Some(designation_id) = patch.designation_id {
                a.designation_id = designation_id;
            }
            if let Some(hired_on) = patch.hired_on {
                a.hired_on = hired_on;
            }
            a.updated_at = chrono::Utc::now();
            a.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        Ok(self.associates.lock().unwrap().remove(&id).is_some())
    }
}

/// Cache fake with hit/store counters and a switch that makes every call
/// fail, for the degrade-to-database tests.
#[derive(Default)]
pub struct MemCache {
    rows: Mutex<HashMap<Uuid, Task>>,
    pub hits: AtomicUsize,
    pub misses: AtomicUsize,
    pub puts: AtomicUsize,
    pub broken: AtomicBool,
}

impl MemCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn break_cache(&self) {
        self.broken.store(true, Ordering::SeqCst);
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.rows.lock().unwrap().contains_key(&id)
    }
}

#[async_trait]
impl TaskCache for MemCache {
    async fn get(&self, id: Uuid) -> anyhow::Result<Option<Task>> {
        if self.broken.load(Ordering::SeqCst) {
            anyhow::bail!("cache unavailable");
        }
        let found = self.rows.lock().unwrap().get(&id).cloned();
        if found.is_some() {
            self.hits.fetch_add(1, Ordering::SeqCst);
        } else {
            self.misses.fetch_add(1, Ordering::SeqCst);
        }
        Ok(found)
    }

    async fn put(&self, task: &Task) -> anyhow::Result<()> {
        if self.broken.load(Ordering::SeqCst) {
            anyhow::bail!("cache unavailable");
        }
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().unwrap().insert(task.id, task.clone());
        Ok(())
    }

    async fn invalidate(&self, id: Uuid) -> anyhow::Result<()> {
        if self.broken.load(Ordering::SeqCst) {
            anyhow::bail!("cache unavailable");
        }
        self.rows.lock().unwrap().remove(&id);
        Ok(())
    }
}

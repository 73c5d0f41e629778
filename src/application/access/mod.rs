use uuid::Uuid;

use crate::application::ports::associate_repository::AssociateRepository;
use crate::application::ports::collaborator_repository::CollaboratorRepository;
use crate::domain::expenses::expense::Expense;
use crate::domain::tasks::task::Task;
use crate::domain::users::user::Role;

/// Authenticated principal decoded from the access token.
#[derive(Debug, Clone, Copy)]
pub struct Actor {
    pub id: Uuid,
    pub role: Role,
}

impl Actor {
    pub fn new(id: Uuid, role: Role) -> Self {
        Self { id, role }
    }
}

/// What an actor may do with a task. Thresholds are ordered: a manager
/// passes every contributor/viewer gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TaskCapability {
    None,
    View,
    Contribute,
    Manage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AccessDenied {
    /// The actor may not learn the resource exists.
    #[error("not found")]
    Hidden,
    /// The actor can see the resource but not perform the operation.
    #[error("forbidden")]
    Forbidden,
}

// Presentation layer is responsible for building Actor from HTTP inputs.
// This module intentionally avoids depending on presentation types.

pub async fn resolve_task<M>(members: &M, actor: &Actor, task: &Task) -> TaskCapability
where
    M: CollaboratorRepository + ?Sized,
{
    if actor.role.is_elevated() || task.creator_id == actor.id {
        return TaskCapability::Manage;
    }
    let is_member = members
        .is_member(task.id, actor.id)
        .await
        .unwrap_or(false);
    if is_member {
        TaskCapability::Contribute
    } else {
        TaskCapability::None
    }
}

/// View gate for single-task reads. Denial is `Hidden`: an actor with no
/// capability must not learn the task exists.
pub async fn require_view<M>(
    members: &M,
    actor: &Actor,
    task: &Task,
) -> Result<TaskCapability, AccessDenied>
where
    M: CollaboratorRepository + ?Sized,
{
    let cap = resolve_task(members, actor, task).await;
    if cap >= TaskCapability::View {
        Ok(cap)
    } else {
        Err(AccessDenied::Hidden)
    }
}

/// Gate for logging expenses: contributors and managers.
pub async fn require_contribute<M>(
    members: &M,
    actor: &Actor,
    task: &Task,
) -> Result<TaskCapability, AccessDenied>
where
    M: CollaboratorRepository + ?Sized,
{
    match resolve_task(members, actor, task).await {
        cap if cap >= TaskCapability::Contribute => Ok(cap),
        TaskCapability::None => Err(AccessDenied::Hidden),
        _ => Err(AccessDenied::Forbidden),
    }
}

/// Gate for task writes and collaborator management. A contributor can see
/// the task, so denial is `Forbidden`; a stranger gets `Hidden`.
pub async fn require_manage<M>(members: &M, actor: &Actor, task: &Task) -> Result<(), AccessDenied>
where
    M: CollaboratorRepository + ?Sized,
{
    match resolve_task(members, actor, task).await {
        TaskCapability::Manage => Ok(()),
        TaskCapability::None => Err(AccessDenied::Hidden),
        _ => Err(AccessDenied::Forbidden),
    }
}

/// An expense may be edited by its author or by anyone who manages the
/// owning task.
pub fn can_edit_expense(task_cap: TaskCapability, actor: &Actor, expense: &Expense) -> bool {
    task_cap >= TaskCapability::Manage || expense.author_id == actor.id
}

/// True when the actor may manage org records (departments, designations,
/// associates) belonging to the enterprise. SUPER manages everywhere;
/// ADMIN only within the enterprise their own associate record points at.
pub async fn can_manage_org<A>(associates: &A, actor: &Actor, enterprise_id: Uuid) -> bool
where
    A: AssociateRepository + ?Sized,
{
    match actor.role {
        Role::Super => true,
        Role::Admin => match associates.find_by_user(actor.id).await {
            Ok(Some(a)) => a.enterprise_id == enterprise_id,
            _ => false,
        },
        Role::User => false,
    }
}

pub async fn require_org_manage<A>(
    associates: &A,
    actor: &Actor,
    enterprise_id: Uuid,
) -> Result<(), AccessDenied>
where
    A: AssociateRepository + ?Sized,
{
    if can_manage_org(associates, actor, enterprise_id).await {
        Ok(())
    } else {
        Err(AccessDenied::Forbidden)
    }
}

/// Associate records are visible to SUPER, to ADMINs of the same
/// enterprise, and to the linked user themself.
pub async fn can_view_associate<A>(
    associates: &A,
    actor: &Actor,
    record_user_id: Uuid,
    record_enterprise_id: Uuid,
) -> bool
where
    A: AssociateRepository + ?Sized,
{
    if record_user_id == actor.id {
        return true;
    }
    match actor.role {
        Role::Super => true,
        Role::Admin => can_manage_org(associates, actor, record_enterprise_id).await,
        Role::User => false,
    }
}

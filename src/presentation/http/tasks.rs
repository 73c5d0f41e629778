use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::ports::task_repository::TaskPatch;
use crate::application::use_cases::tasks::create_task::{CreateTask, CreateTaskInput};
use crate::application::use_cases::tasks::delete_task::DeleteTask;
use crate::application::use_cases::tasks::get_task::GetTask;
use crate::application::use_cases::tasks::list_tasks::ListTasks;
use crate::application::use_cases::tasks::update_task::UpdateTask;
use crate::bootstrap::app_context::AppContext;
use crate::domain::tasks::task::{Task, TaskStatus};
use crate::presentation::http::auth::{self, Bearer};
use crate::presentation::http::error::ApiError;
use crate::presentation::http::{DoubleOption, deserialize_double_option};

#[derive(Debug, Serialize, ToSchema)]
pub struct TaskResponse {
    pub id: Uuid,
    pub creator_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub budget: Decimal,
    pub due_date: Option<chrono::NaiveDate>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            creator_id: task.creator_id,
            title: task.title,
            description: task.description,
            status: task.status.to_string(),
            budget: task.budget,
            due_date: task.due_date,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: Option<String>,
    pub budget: Option<Decimal>,
    pub due_date: Option<chrono::NaiveDate>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_double_option")]
    #[schema(value_type = Option<String>)]
    pub description: DoubleOption<String>,
    pub status: Option<String>,
    pub budget: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_double_option")]
    #[schema(value_type = Option<chrono::NaiveDate>)]
    pub due_date: DoubleOption<chrono::NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct TasksQuery {
    pub status: Option<String>,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/:id",
            get(get_task).patch(update_task).delete(delete_task),
        )
        .with_state(ctx)
}

fn parse_status(raw: &str) -> Result<TaskStatus, ApiError> {
    raw.parse::<TaskStatus>().map_err(|_| {
        ApiError::bad_request("status must be one of OPEN, IN_PROGRESS, COMPLETED")
    })
}

#[utoipa::path(get, path = "/api/tasks", tag = "Tasks",
    params(("status" = Option<String>, Query, description = "Filter by status")),
    responses((status = 200, body = [TaskResponse])))]
pub async fn list_tasks(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Query(q): Query<TasksQuery>,
) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let actor = auth::actor_from_bearer(&ctx.cfg, bearer)?;
    let status = match q.status.as_deref() {
        Some(raw) => Some(parse_status(raw)?),
        None => None,
    };
    let repo = ctx.task_repo();
    let uc = ListTasks {
        repo: repo.as_ref(),
    };
    let tasks = uc.execute(&actor, status).await?;
    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

#[utoipa::path(post, path = "/api/tasks", tag = "Tasks", request_body = CreateTaskRequest, responses((status = 200, body = TaskResponse)))]
pub async fn create_task(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Json(req): Json<CreateTaskRequest>,
) -> Result<Json<TaskResponse>, ApiError> {
    let actor = auth::actor_from_bearer(&ctx.cfg, bearer)?;
    let repo = ctx.task_repo();
    let uc = CreateTask {
        repo: repo.as_ref(),
    };
    let task = uc
        .execute(
            actor.id,
            CreateTaskInput {
                title: req.title,
                description: req.description,
                budget: req.budget,
                due_date: req.due_date,
            },
        )
        .await?;
    Ok(Json(task.into()))
}

#[utoipa::path(get, path = "/api/tasks/{id}", tag = "Tasks",
    params(("id" = Uuid, Path, description = "Task ID")),
    responses((status = 200, body = TaskResponse), (status = 404)))]
pub async fn get_task(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<Uuid>,
) -> Result<Json<TaskResponse>, ApiError> {
    let actor = auth::actor_from_bearer(&ctx.cfg, bearer)?;
    let repo = ctx.task_repo();
    let members = ctx.collaborator_repo();
    let cache = ctx.task_cache();
    let uc = GetTask {
        repo: repo.as_ref(),
        members: members.as_ref(),
        cache: cache.as_ref(),
    };
    let task = uc.execute(&actor, id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(task.into()))
}

#[utoipa::path(patch, path = "/api/tasks/{id}", tag = "Tasks",
    params(("id" = Uuid, Path, description = "Task ID")),
    request_body = UpdateTaskRequest,
    responses((status = 200, body = TaskResponse), (status = 403), (status = 404)))]
pub async fn update_task(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateTaskRequest>,
) -> Result<Json<TaskResponse>, ApiError> {
    let actor = auth::actor_from_bearer(&ctx.cfg, bearer)?;
    let status = match req.status.as_deref() {
        Some(raw) => Some(parse_status(raw)?),
        None => None,
    };
    let patch = TaskPatch {
        title: req.title,
        description: req.description.into_patch(),
        status,
        budget: req.budget,
        due_date: req.due_date.into_patch(),
    };
    let repo = ctx.task_repo();
    let members = ctx.collaborator_repo();
    let cache = ctx.task_cache();
    let uc = UpdateTask {
        repo: repo.as_ref(),
        members: members.as_ref(),
        cache: cache.as_ref(),
    };
    let task = uc.execute(&actor, id, patch).await?;
    Ok(Json(task.into()))
}

#[utoipa::path(delete, path = "/api/tasks/{id}", tag = "Tasks",
    params(("id" = Uuid, Path, description = "Task ID")),
    responses((status = 204), (status = 403), (status = 404)))]
pub async fn delete_task(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let actor = auth::actor_from_bearer(&ctx.cfg, bearer)?;
    let repo = ctx.task_repo();
    let members = ctx.collaborator_repo();
    let cache = ctx.task_cache();
    let uc = DeleteTask {
        repo: repo.as_ref(),
        members: members.as_ref(),
        cache: cache.as_ref(),
    };
    uc.execute(&actor, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

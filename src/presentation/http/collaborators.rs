use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::use_cases::collaborators::add_collaborator::AddCollaborator;
use crate::application::use_cases::collaborators::list_collaborators::ListCollaborators;
use crate::application::use_cases::collaborators::remove_collaborator::RemoveCollaborator;
use crate::bootstrap::app_context::AppContext;
use crate::domain::users::user::UserSummary;
use crate::presentation::http::auth::{self, Bearer};
use crate::presentation::http::error::ApiError;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddCollaboratorRequest {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CollaboratorResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

impl From<UserSummary> for CollaboratorResponse {
    fn from(user: UserSummary) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
        }
    }
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route(
            "/tasks/:id/collaborators",
            get(list_collaborators).post(add_collaborator),
        )
        .route(
            "/tasks/:id/collaborators/:user_id",
            delete(remove_collaborator),
        )
        .with_state(ctx)
}

#[utoipa::path(get, path = "/api/tasks/{id}/collaborators", tag = "Collaborators",
    params(("id" = Uuid, Path, description = "Task ID")),
    responses((status = 200, body = [CollaboratorResponse]), (status = 404)))]
pub async fn list_collaborators(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<CollaboratorResponse>>, ApiError> {
    let actor = auth::actor_from_bearer(&ctx.cfg, bearer)?;
    let repo = ctx.task_repo();
    let members = ctx.collaborator_repo();
    let uc = ListCollaborators {
        repo: repo.as_ref(),
        members: members.as_ref(),
    };
    let list = uc.execute(&actor, id).await?;
    Ok(Json(
        list.into_iter().map(CollaboratorResponse::from).collect(),
    ))
}

#[utoipa::path(post, path = "/api/tasks/{id}/collaborators", tag = "Collaborators",
    params(("id" = Uuid, Path, description = "Task ID")),
    request_body = AddCollaboratorRequest,
    responses(
        (status = 204),
        (status = 400, description = "Target is the creator"),
        (status = 404, description = "Task or user not found"),
        (status = 409, description = "Already a collaborator")
    ))]
pub async fn add_collaborator(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<Uuid>,
    Json(req): Json<AddCollaboratorRequest>,
) -> Result<StatusCode, ApiError> {
    let actor = auth::actor_from_bearer(&ctx.cfg, bearer)?;
    let repo = ctx.task_repo();
    let members = ctx.collaborator_repo();
    let users = ctx.user_repo();
    let uc = AddCollaborator {
        repo: repo.as_ref(),
        members: members.as_ref(),
        users: users.as_ref(),
    };
    uc.execute(&actor, id, req.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(delete, path = "/api/tasks/{id}/collaborators/{user_id}", tag = "Collaborators",
    params(
        ("id" = Uuid, Path, description = "Task ID"),
        ("user_id" = Uuid, Path, description = "Collaborator user ID")
    ),
    responses((status = 204), (status = 404, description = "Task not found or not a member")))]
pub async fn remove_collaborator(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path((id, user_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    let actor = auth::actor_from_bearer(&ctx.cfg, bearer)?;
    let repo = ctx.task_repo();
    let members = ctx.collaborator_repo();
    let uc = RemoveCollaborator {
        repo: repo.as_ref(),
        members: members.as_ref(),
    };
    uc.execute(&actor, id, user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

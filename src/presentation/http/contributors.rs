use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::use_cases::contributors::list_contributions::ListContributions;
use crate::application::use_cases::contributors::list_contributors::ListContributors;
use crate::bootstrap::app_context::AppContext;
use crate::domain::tasks::task::Contributor;
use crate::presentation::http::auth::{self, Bearer};
use crate::presentation::http::error::ApiError;
use crate::presentation::http::tasks::TaskResponse;

#[derive(Debug, Serialize, ToSchema)]
pub struct ContributorResponse {
    pub user_id: Uuid,
    pub email: String,
    pub name: String,
    pub is_creator: bool,
}

impl From<Contributor> for ContributorResponse {
    fn from(row: Contributor) -> Self {
        Self {
            user_id: row.user_id,
            email: row.email,
            name: row.name,
            is_creator: row.is_creator,
        }
    }
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/tasks/:id/contributors", get(list_contributors))
        .route("/contributions", get(list_contributions))
        .with_state(ctx)
}

#[utoipa::path(get, path = "/api/tasks/{id}/contributors", tag = "Contributors",
    params(("id" = Uuid, Path, description = "Task ID")),
    responses((status = 200, body = [ContributorResponse]), (status = 404)))]
pub async fn list_contributors(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ContributorResponse>>, ApiError> {
    let actor = auth::actor_from_bearer(&ctx.cfg, bearer)?;
    let repo = ctx.task_repo();
    let members = ctx.collaborator_repo();
    let uc = ListContributors {
        repo: repo.as_ref(),
        members: members.as_ref(),
    };
    let list = uc.execute(&actor, id).await?;
    Ok(Json(
        list.into_iter().map(ContributorResponse::from).collect(),
    ))
}

#[utoipa::path(get, path = "/api/contributions", tag = "Contributors",
    responses((status = 200, body = [TaskResponse])))]
pub async fn list_contributions(
    State(ctx): State<AppContext>,
    bearer: Bearer,
) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let actor = auth::actor_from_bearer(&ctx.cfg, bearer)?;
    let repo = ctx.task_repo();
    let uc = ListContributions {
        repo: repo.as_ref(),
    };
    let tasks = uc.execute(&actor).await?;
    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

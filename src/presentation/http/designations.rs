use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::use_cases::designations::create_designation::CreateDesignation;
use crate::application::use_cases::designations::delete_designation::DeleteDesignation;
use crate::application::use_cases::designations::get_designation::GetDesignation;
use crate::application::use_cases::designations::list_designations::ListDesignations;
use crate::application::use_cases::designations::update_designation::UpdateDesignation;
use crate::bootstrap::app_context::AppContext;
use crate::domain::orgs::designation::Designation;
use crate::presentation::http::auth::{self, Bearer};
use crate::presentation::http::error::ApiError;

#[derive(Debug, Serialize, ToSchema)]
pub struct DesignationResponse {
    pub id: Uuid,
    pub enterprise_id: Uuid,
    pub title: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Designation> for DesignationResponse {
    fn from(designation: Designation) -> Self {
        Self {
            id: designation.id,
            enterprise_id: designation.enterprise_id,
            title: designation.title,
            created_at: designation.created_at,
            updated_at: designation.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateDesignationRequest {
    pub enterprise_id: Uuid,
    pub title: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateDesignationRequest {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct DesignationsQuery {
    pub enterprise_id: Option<Uuid>,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route(
            "/designations",
            get(list_designations).post(create_designation),
        )
        .route(
            "/designations/:id",
            get(get_designation)
                .patch(update_designation)
                .delete(delete_designation),
        )
        .with_state(ctx)
}

#[utoipa::path(get, path = "/api/designations", tag = "Organization",
    params(("enterprise_id" = Option<Uuid>, Query, description = "Filter by enterprise")),
    responses((status = 200, body = [DesignationResponse])))]
pub async fn list_designations(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Query(q): Query<DesignationsQuery>,
) -> Result<Json<Vec<DesignationResponse>>, ApiError> {
    auth::actor_from_bearer(&ctx.cfg, bearer)?;
    let repo = ctx.designation_repo();
    let uc = ListDesignations {
        repo: repo.as_ref(),
    };
    let list = uc.execute(q.enterprise_id).await?;
    Ok(Json(
        list.into_iter().map(DesignationResponse::from).collect(),
    ))
}

#[utoipa::path(post, path = "/api/designations", tag = "Organization",
    request_body = CreateDesignationRequest,
    responses(
        (status = 200, body = DesignationResponse),
        (status = 403),
        (status = 404, description = "Enterprise not found"),
        (status = 409, description = "Title taken within the enterprise")
    ))]
pub async fn create_designation(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Json(req): Json<CreateDesignationRequest>,
) -> Result<Json<DesignationResponse>, ApiError> {
    let actor = auth::actor_from_bearer(&ctx.cfg, bearer)?;
    let repo = ctx.designation_repo();
    let associates = ctx.associate_repo();
    let uc = CreateDesignation {
        repo: repo.as_ref(),
        associates: associates.as_ref(),
    };
    let designation = uc.execute(&actor, req.enterprise_id, &req.title).await?;
    Ok(Json(designation.into()))
}

#[utoipa::path(get, path = "/api/designations/{id}", tag = "Organization",
    params(("id" = Uuid, Path, description = "Designation ID")),
    responses((status = 200, body = DesignationResponse), (status = 404)))]
pub async fn get_designation(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<Uuid>,
) -> Result<Json<DesignationResponse>, ApiError> {
    auth::actor_from_bearer(&ctx.cfg, bearer)?;
    let repo = ctx.designation_repo();
    let uc = GetDesignation {
        repo: repo.as_ref(),
    };
    let designation = uc.execute(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(designation.into()))
}

#[utoipa::path(patch, path = "/api/designations/{id}", tag = "Organization",
    params(("id" = Uuid, Path, description = "Designation ID")),
    request_body = UpdateDesignationRequest,
    responses((status = 200, body = DesignationResponse), (status = 403), (status = 404)))]
pub async fn update_designation(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateDesignationRequest>,
) -> Result<Json<DesignationResponse>, ApiError> {
    let actor = auth::actor_from_bearer(&ctx.cfg, bearer)?;
    let repo = ctx.designation_repo();
    let associates = ctx.associate_repo();
    let uc = UpdateDesignation {
        repo: repo.as_ref(),
        associates: associates.as_ref(),
    };
    let designation = uc.execute(&actor, id, req.title).await?;
    Ok(Json(designation.into()))
}

#[utoipa::path(delete, path = "/api/designations/{id}", tag = "Organization",
    params(("id" = Uuid, Path, description = "Designation ID")),
    responses((status = 204), (status = 403), (status = 404)))]
pub async fn delete_designation(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let actor = auth::actor_from_bearer(&ctx.cfg, bearer)?;
    let repo = ctx.designation_repo();
    let associates = ctx.associate_repo();
    let uc = DeleteDesignation {
        repo: repo.as_ref(),
        associates: associates.as_ref(),
    };
    uc.execute(&actor, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::use_cases::departments::create_department::CreateDepartment;
use crate::application::use_cases::departments::delete_department::DeleteDepartment;
use crate::application::use_cases::departments::get_department::GetDepartment;
use crate::application::use_cases::departments::list_departments::ListDepartments;
use crate::application::use_cases::departments::update_department::UpdateDepartment;
use crate::bootstrap::app_context::AppContext;
use crate::domain::orgs::department::Department;
use crate::presentation::http::auth::{self, Bearer};
use crate::presentation::http::error::ApiError;

#[derive(Debug, Serialize, ToSchema)]
pub struct DepartmentResponse {
    pub id: Uuid,
    pub enterprise_id: Uuid,
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Department> for DepartmentResponse {
    fn from(department: Department) -> Self {
        Self {
            id: department.id,
            enterprise_id: department.enterprise_id,
            name: department.name,
            created_at: department.created_at,
            updated_at: department.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateDepartmentRequest {
    pub enterprise_id: Uuid,
    pub name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateDepartmentRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct DepartmentsQuery {
    pub enterprise_id: Option<Uuid>,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/departments", get(list_departments).post(create_department))
        .route(
            "/departments/:id",
            get(get_department)
                .patch(update_department)
                .delete(delete_department),
        )
        .with_state(ctx)
}

#[utoipa::path(get, path = "/api/departments", tag = "Organization",
    params(("enterprise_id" = Option<Uuid>, Query, description = "Filter by enterprise")),
    responses((status = 200, body = [DepartmentResponse])))]
pub async fn list_departments(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Query(q): Query<DepartmentsQuery>,
) -> Result<Json<Vec<DepartmentResponse>>, ApiError> {
    auth::actor_from_bearer(&ctx.cfg, bearer)?;
    let repo = ctx.department_repo();
    let uc = ListDepartments {
        repo: repo.as_ref(),
    };
    let list = uc.execute(q.enterprise_id).await?;
    Ok(Json(list.into_iter().map(DepartmentResponse::from).collect()))
}

#[utoipa::path(post, path = "/api/departments", tag = "Organization",
    request_body = CreateDepartmentRequest,
    responses(
        (status = 200, body = DepartmentResponse),
        (status = 403),
        (status = 404, description = "Enterprise not found"),
        (status = 409, description = "Name taken within the enterprise")
    ))]
pub async fn create_department(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Json(req): Json<CreateDepartmentRequest>,
) -> Result<Json<DepartmentResponse>, ApiError> {
    let actor = auth::actor_from_bearer(&ctx.cfg, bearer)?;
    let repo = ctx.department_repo();
    let associates = ctx.associate_repo();
    let uc = CreateDepartment {
        repo: repo.as_ref(),
        associates: associates.as_ref(),
    };
    let department = uc.execute(&actor, req.enterprise_id, &req.name).await?;
    Ok(Json(department.into()))
}

#[utoipa::path(get, path = "/api/departments/{id}", tag = "Organization",
    params(("id" = Uuid, Path, description = "Department ID")),
    responses((status = 200, body = DepartmentResponse), (status = 404)))]
pub async fn get_department(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<Uuid>,
) -> Result<Json<DepartmentResponse>, ApiError> {
    auth::actor_from_bearer(&ctx.cfg, bearer)?;
    let repo = ctx.department_repo();
    let uc = GetDepartment {
        repo: repo.as_ref(),
    };
    let department = uc.execute(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(department.into()))
}

#[utoipa::path(patch, path = "/api/departments/{id}", tag = "Organization",
    params(("id" = Uuid, Path, description = "Department ID")),
    request_body = UpdateDepartmentRequest,
    responses((status = 200, body = DepartmentResponse), (status = 403), (status = 404)))]
pub async fn update_department(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateDepartmentRequest>,
) -> Result<Json<DepartmentResponse>, ApiError> {
    let actor = auth::actor_from_bearer(&ctx.cfg, bearer)?;
    let repo = ctx.department_repo();
    let associates = ctx.associate_repo();
    let uc = UpdateDepartment {
        repo: repo.as_ref(),
        associates: associates.as_ref(),
    };
    let department = uc.execute(&actor, id, req.name).await?;
    Ok(Json(department.into()))
}

#[utoipa::path(delete, path = "/api/departments/{id}", tag = "Organization",
    params(("id" = Uuid, Path, description = "Department ID")),
    responses((status = 204), (status = 403), (status = 404)))]
pub async fn delete_department(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let actor = auth::actor_from_bearer(&ctx.cfg, bearer)?;
    let repo = ctx.department_repo();
    let associates = ctx.associate_repo();
    let uc = DeleteDepartment {
        repo: repo.as_ref(),
        associates: associates.as_ref(),
    };
    uc.execute(&actor, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::ports::associate_repository::AssociatePatch;
use crate::application::use_cases::associates::create_associate::{
    CreateAssociate, CreateAssociateInput,
};
use crate::application::use_cases::associates::delete_associate::DeleteAssociate;
use crate::application::use_cases::associates::get_associate::GetAssociate;
use crate::application::use_cases::associates::list_associates::ListAssociates;
use crate::application::use_cases::associates::update_associate::UpdateAssociate;
use crate::bootstrap::app_context::AppContext;
use crate::domain::orgs::associate::AssociateDetail;
use crate::presentation::http::auth::{self, Bearer};
use crate::presentation::http::error::ApiError;
use crate::presentation::http::{DoubleOption, deserialize_double_option};

#[derive(Debug, Serialize, ToSchema)]
pub struct AssociateResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub user_email: String,
    pub enterprise_id: Uuid,
    pub enterprise_name: String,
    pub department_id: Option<Uuid>,
    pub department_name: Option<String>,
    pub designation_id: Option<Uuid>,
    pub designation_title: Option<String>,
    pub hired_on: chrono::NaiveDate,
}

impl From<AssociateDetail> for AssociateResponse {
    fn from(detail: AssociateDetail) -> Self {
        Self {
            id: detail.id,
            user_id: detail.user_id,
            user_name: detail.user_name,
            user_email: detail.user_email,
            enterprise_id: detail.enterprise_id,
            enterprise_name: detail.enterprise_name,
            department_id: detail.department_id,
            department_name: detail.department_name,
            designation_id: detail.designation_id,
            designation_title: detail.designation_title,
            hired_on: detail.hired_on,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAssociateRequest {
    pub user_id: Uuid,
    pub enterprise_id: Uuid,
    pub department_id: Option<Uuid>,
    pub designation_id: Option<Uuid>,
    pub hired_on: Option<chrono::NaiveDate>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateAssociateRequest {
    #[serde(default, deserialize_with = "deserialize_double_option")]
    #[schema(value_type = Option<Uuid>)]
    pub department_id: DoubleOption<Uuid>,
    #[serde(default, deserialize_with = "deserialize_double_option")]
    #[schema(value_type = Option<Uuid>)]
    pub designation_id: DoubleOption<Uuid>,
    pub hired_on: Option<chrono::NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct AssociatesQuery {
    pub enterprise_id: Option<Uuid>,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/associates", get(list_associates).post(create_associate))
        .route(
            "/associates/:id",
            get(get_associate)
                .patch(update_associate)
                .delete(delete_associate),
        )
        .with_state(ctx)
}

#[utoipa::path(get, path = "/api/associates", tag = "Organization",
    params(("enterprise_id" = Option<Uuid>, Query, description = "Filter by enterprise")),
    responses((status = 200, body = [AssociateResponse]), (status = 403)))]
pub async fn list_associates(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Query(q): Query<AssociatesQuery>,
) -> Result<Json<Vec<AssociateResponse>>, ApiError> {
    let actor = auth::actor_from_bearer(&ctx.cfg, bearer)?;
    let repo = ctx.associate_repo();
    let uc = ListAssociates {
        repo: repo.as_ref(),
    };
    let list = uc.execute(&actor, q.enterprise_id).await?;
    Ok(Json(list.into_iter().map(AssociateResponse::from).collect()))
}

#[utoipa::path(post, path = "/api/associates", tag = "Organization",
    request_body = CreateAssociateRequest,
    responses(
        (status = 200, body = AssociateResponse),
        (status = 400, description = "Org link from another enterprise"),
        (status = 403),
        (status = 404),
        (status = 409, description = "User already employed")
    ))]
pub async fn create_associate(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Json(req): Json<CreateAssociateRequest>,
) -> Result<Json<AssociateResponse>, ApiError> {
    let actor = auth::actor_from_bearer(&ctx.cfg, bearer)?;
    let repo = ctx.associate_repo();
    let departments = ctx.department_repo();
    let designations = ctx.designation_repo();
    let uc = CreateAssociate {
        repo: repo.as_ref(),
        departments: departments.as_ref(),
        designations: designations.as_ref(),
    };
    let input = CreateAssociateInput {
        user_id: req.user_id,
        enterprise_id: req.enterprise_id,
        department_id: req.department_id,
        designation_id: req.designation_id,
        hired_on: req.hired_on,
    };
    let associate = uc.execute(&actor, input).await?;
    let detail = repo
        .get_detail(associate.id)
        .await?
        .ok_or(ApiError::Internal)?;
    Ok(Json(detail.into()))
}

#[utoipa::path(get, path = "/api/associates/{id}", tag = "Organization",
    params(("id" = Uuid, Path, description = "Associate ID")),
    responses((status = 200, body = AssociateResponse), (status = 404)))]
pub async fn get_associate(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<Uuid>,
) -> Result<Json<AssociateResponse>, ApiError> {
    let actor = auth::actor_from_bearer(&ctx.cfg, bearer)?;
    let repo = ctx.associate_repo();
    let uc = GetAssociate {
        repo: repo.as_ref(),
    };
    let detail = uc.execute(&actor, id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(detail.into()))
}

#[utoipa::path(patch, path = "/api/associates/{id}", tag = "Organization",
    params(("id" = Uuid, Path, description = "Associate ID")),
    request_body = UpdateAssociateRequest,
    responses(
        (status = 200, body = AssociateResponse),
        (status = 400, description = "Org link from another enterprise"),
        (status = 403),
        (status = 404)
    ))]
pub async fn update_associate(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateAssociateRequest>,
) -> Result<Json<AssociateResponse>, ApiError> {
    let actor = auth::actor_from_bearer(&ctx.cfg, bearer)?;
    let repo = ctx.associate_repo();
    let departments = ctx.department_repo();
    let designations = ctx.designation_repo();
    let uc = UpdateAssociate {
        repo: repo.as_ref(),
        departments: departments.as_ref(),
        designations: designations.as_ref(),
    };
    let patch = AssociatePatch {
        department_id: req.department_id.into_patch(),
        designation_id: req.designation_id.into_patch(),
        hired_on: req.hired_on,
    };
    let associate = uc.execute(&actor, id, patch).await?;
    let detail = repo
        .get_detail(associate.id)
        .await?
        .ok_or(ApiError::Internal)?;
    Ok(Json(detail.into()))
}

#[utoipa::path(delete, path = "/api/associates/{id}", tag = "Organization",
    params(("id" = Uuid, Path, description = "Associate ID")),
    responses((status = 204), (status = 403), (status = 404)))]
pub async fn delete_associate(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let actor = auth::actor_from_bearer(&ctx.cfg, bearer)?;
    let repo = ctx.associate_repo();
    let uc = DeleteAssociate {
        repo: repo.as_ref(),
    };
    uc.execute(&actor, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::use_cases::enterprises::create_enterprise::CreateEnterprise;
use crate::application::use_cases::enterprises::delete_enterprise::DeleteEnterprise;
use crate::application::use_cases::enterprises::get_enterprise::GetEnterprise;
use crate::application::use_cases::enterprises::list_enterprises::ListEnterprises;
use crate::application::use_cases::enterprises::update_enterprise::UpdateEnterprise;
use crate::bootstrap::app_context::AppContext;
use crate::domain::orgs::enterprise::Enterprise;
use crate::presentation::http::auth::{self, Bearer};
use crate::presentation::http::error::ApiError;
use crate::presentation::http::{DoubleOption, deserialize_double_option};

#[derive(Debug, Serialize, ToSchema)]
pub struct EnterpriseResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Enterprise> for EnterpriseResponse {
    fn from(enterprise: Enterprise) -> Self {
        Self {
            id: enterprise.id,
            name: enterprise.name,
            description: enterprise.description,
            created_at: enterprise.created_at,
            updated_at: enterprise.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEnterpriseRequest {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateEnterpriseRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_double_option")]
    #[schema(value_type = Option<String>)]
    pub description: DoubleOption<String>,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/enterprises", get(list_enterprises).post(create_enterprise))
        .route(
            "/enterprises/:id",
            get(get_enterprise)
                .patch(update_enterprise)
                .delete(delete_enterprise),
        )
        .with_state(ctx)
}

#[utoipa::path(get, path = "/api/enterprises", tag = "Organization",
    responses((status = 200, body = [EnterpriseResponse])))]
pub async fn list_enterprises(
    State(ctx): State<AppContext>,
    bearer: Bearer,
) -> Result<Json<Vec<EnterpriseResponse>>, ApiError> {
    auth::actor_from_bearer(&ctx.cfg, bearer)?;
    let repo = ctx.enterprise_repo();
    let uc = ListEnterprises {
        repo: repo.as_ref(),
    };
    let list = uc.execute().await?;
    Ok(Json(list.into_iter().map(EnterpriseResponse::from).collect()))
}

#[utoipa::path(post, path = "/api/enterprises", tag = "Organization",
    request_body = CreateEnterpriseRequest,
    responses(
        (status = 200, body = EnterpriseResponse),
        (status = 403, description = "Requires SUPER"),
        (status = 409, description = "Name taken")
    ))]
pub async fn create_enterprise(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Json(req): Json<CreateEnterpriseRequest>,
) -> Result<Json<EnterpriseResponse>, ApiError> {
    let actor = auth::actor_from_bearer(&ctx.cfg, bearer)?;
    let repo = ctx.enterprise_repo();
    let uc = CreateEnterprise {
        repo: repo.as_ref(),
    };
    let enterprise = uc
        .execute(&actor, &req.name, req.description.as_deref())
        .await?;
    Ok(Json(enterprise.into()))
}

#[utoipa::path(get, path = "/api/enterprises/{id}", tag = "Organization",
    params(("id" = Uuid, Path, description = "Enterprise ID")),
    responses((status = 200, body = EnterpriseResponse), (status = 404)))]
pub async fn get_enterprise(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<Uuid>,
) -> Result<Json<EnterpriseResponse>, ApiError> {
    auth::actor_from_bearer(&ctx.cfg, bearer)?;
    let repo = ctx.enterprise_repo();
    let uc = GetEnterprise {
        repo: repo.as_ref(),
    };
    let enterprise = uc.execute(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(enterprise.into()))
}

#[utoipa::path(patch, path = "/api/enterprises/{id}", tag = "Organization",
    params(("id" = Uuid, Path, description = "Enterprise ID")),
    request_body = UpdateEnterpriseRequest,
    responses((status = 200, body = EnterpriseResponse), (status = 403), (status = 404)))]
pub async fn update_enterprise(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateEnterpriseRequest>,
) -> Result<Json<EnterpriseResponse>, ApiError> {
    let actor = auth::actor_from_bearer(&ctx.cfg, bearer)?;
    let repo = ctx.enterprise_repo();
    let associates = ctx.associate_repo();
    let uc = UpdateEnterprise {
        repo: repo.as_ref(),
        associates: associates.as_ref(),
    };
    let enterprise = uc
        .execute(&actor, id, req.name, req.description.into_patch())
        .await?;
    Ok(Json(enterprise.into()))
}

#[utoipa::path(delete, path = "/api/enterprises/{id}", tag = "Organization",
    params(("id" = Uuid, Path, description = "Enterprise ID")),
    responses((status = 204), (status = 403), (status = 404)))]
pub async fn delete_enterprise(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let actor = auth::actor_from_bearer(&ctx.cfg, bearer)?;
    let repo = ctx.enterprise_repo();
    let uc = DeleteEnterprise {
        repo: repo.as_ref(),
    };
    uc.execute(&actor, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, patch},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::use_cases::users::get_profile::GetProfile;
use crate::application::use_cases::users::list_users::ListUsers;
use crate::application::use_cases::users::update_profile::UpdateProfile;
use crate::application::use_cases::users::update_role::UpdateUserRole;
use crate::bootstrap::app_context::AppContext;
use crate::domain::users::user::Role;
use crate::presentation::http::associates::AssociateResponse;
use crate::presentation::http::auth::{self, Bearer, UserResponse};
use crate::presentation::http::error::ApiError;

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: String,
    pub employment: Option<AssociateResponse>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateRoleRequest {
    pub role: String,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/profile", get(get_profile).patch(update_profile))
        .route("/users/:id/role", patch(update_role))
        .with_state(ctx)
}

#[utoipa::path(get, path = "/api/users/profile", tag = "Users", responses((status = 200, body = ProfileResponse)))]
pub async fn get_profile(
    State(ctx): State<AppContext>,
    bearer: Bearer,
) -> Result<Json<ProfileResponse>, ApiError> {
    let actor = auth::actor_from_bearer(&ctx.cfg, bearer)?;
    let users = ctx.user_repo();
    let associates = ctx.associate_repo();
    let uc = GetProfile {
        users: users.as_ref(),
        associates: associates.as_ref(),
    };
    let profile = uc.execute(actor.id).await?.ok_or(ApiError::Unauthorized)?;
    Ok(Json(ProfileResponse {
        id: profile.user.id,
        email: profile.user.email,
        name: profile.user.name,
        role: profile.user.role.to_string(),
        employment: profile.employment.map(AssociateResponse::from),
    }))
}

#[utoipa::path(patch, path = "/api/users/profile", tag = "Users", request_body = UpdateProfileRequest, responses((status = 200, body = UserResponse)))]
pub async fn update_profile(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let actor = auth::actor_from_bearer(&ctx.cfg, bearer)?;
    if let Some(name) = &req.name {
        if name.trim().is_empty() {
            return Err(ApiError::bad_request("name must not be empty"));
        }
    }
    if let Some(password) = &req.password {
        if password.is_empty() {
            return Err(ApiError::bad_request("password must not be empty"));
        }
    }
    let repo = ctx.user_repo();
    let uc = UpdateProfile {
        repo: repo.as_ref(),
    };
    let user = uc
        .execute(actor.id, req.name, req.password)
        .await?
        .ok_or(ApiError::Unauthorized)?;
    Ok(Json(user.into()))
}

#[utoipa::path(get, path = "/api/users", tag = "Users", responses(
    (status = 200, body = [UserResponse]),
    (status = 403, description = "Requires ADMIN or SUPER")
))]
pub async fn list_users(
    State(ctx): State<AppContext>,
    bearer: Bearer,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let actor = auth::actor_from_bearer(&ctx.cfg, bearer)?;
    if !actor.role.is_elevated() {
        return Err(ApiError::Forbidden);
    }
    let repo = ctx.user_repo();
    let uc = ListUsers {
        repo: repo.as_ref(),
    };
    let users = uc.execute().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

#[utoipa::path(patch, path = "/api/users/{id}/role", tag = "Users",
    params(("id" = Uuid, Path, description = "User ID")),
    request_body = UpdateRoleRequest,
    responses(
        (status = 200, body = UserResponse),
        (status = 400, description = "Unknown role or self-demotion"),
        (status = 403, description = "Requires SUPER")
    ))]
pub async fn update_role(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateRoleRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let actor = auth::actor_from_bearer(&ctx.cfg, bearer)?;
    let role = req
        .role
        .parse::<Role>()
        .map_err(|_| ApiError::bad_request("role must be one of USER, ADMIN, SUPER"))?;
    let users = ctx.user_repo();
    let tokens = ctx.refresh_token_repo();
    let uc = UpdateUserRole {
        users: users.as_ref(),
        tokens: tokens.as_ref(),
    };
    let user = uc.execute(&actor, id, role).await?;
    Ok(Json(user.into()))
}

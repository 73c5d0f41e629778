use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::access::Actor;
use crate::application::use_cases::auth::login::{Login, LoginRequest as LoginInput};
use crate::application::use_cases::auth::me::GetMe;
use crate::application::use_cases::auth::signup::{Signup, SignupRequest as SignupInput};
use crate::application::use_cases::tokens::issue_refresh::IssueRefreshToken;
use crate::application::use_cases::tokens::revoke_refresh::RevokeRefreshToken;
use crate::application::use_cases::tokens::rotate_refresh::RotateRefreshToken;
use crate::bootstrap::app_context::AppContext;
use crate::bootstrap::config::Config;
use crate::domain::users::user::{Role, User};
use crate::presentation::http::error::ApiError;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SignupRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserResponse,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RefreshResponse {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub exp: usize,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/refresh", post(refresh))
        .route("/logout", post(logout))
        .route("/me", get(me))
        .with_state(ctx)
}

#[utoipa::path(post, path = "/api/auth/signup", tag = "Auth", request_body = SignupRequest, security(()), responses(
    (status = 200, body = UserResponse),
    (status = 409, description = "Email already registered")
))]
pub async fn signup(
    State(ctx): State<AppContext>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    if req.email.trim().is_empty() || req.password.is_empty() {
        return Err(ApiError::bad_request("email and password are required"));
    }
    let repo = ctx.user_repo();
    let uc = Signup {
        repo: repo.as_ref(),
    };
    let input = SignupInput {
        email: req.email.trim().to_string(),
        name: req.name.clone(),
        password: req.password.clone(),
    };
    let user = uc.execute(&input).await?;
    Ok(Json(user.into()))
}

#[utoipa::path(post, path = "/api/auth/login", tag = "Auth", request_body = LoginRequest, security(()), responses(
    (status = 200, body = LoginResponse),
    (status = 401, description = "Bad credentials")
))]
pub async fn login(
    State(ctx): State<AppContext>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let users = ctx.user_repo();
    let uc = Login {
        repo: users.as_ref(),
    };
    let input = LoginInput {
        email: req.email.clone(),
        password: req.password.clone(),
    };
    let user = uc.execute(&input).await?.ok_or(ApiError::Unauthorized)?;

    let access_token = issue_access_token(&ctx.cfg, user.id, user.role)?;
    let tokens = ctx.refresh_token_repo();
    let refresh_token = IssueRefreshToken {
        repo: tokens.as_ref(),
    }
    .execute(user.id, ctx.cfg.refresh_ttl_secs)
    .await?;

    Ok(Json(LoginResponse {
        access_token,
        refresh_token,
        user: user.into(),
    }))
}

#[utoipa::path(post, path = "/api/auth/refresh", tag = "Auth", request_body = RefreshRequest, security(()), responses(
    (status = 200, body = RefreshResponse),
    (status = 401, description = "Unknown, expired, or revoked token")
))]
pub async fn refresh(
    State(ctx): State<AppContext>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<RefreshResponse>, ApiError> {
    let tokens = ctx.refresh_token_repo();
    let rotated = RotateRefreshToken {
        repo: tokens.as_ref(),
    }
    .execute(&req.refresh_token, ctx.cfg.refresh_ttl_secs)
    .await?
    .ok_or(ApiError::Unauthorized)?;

    // Role is read fresh so a tier change applies from the next rotation.
    let users = ctx.user_repo();
    let user = users
        .find_by_id(rotated.user_id)
        .await?
        .ok_or(ApiError::Unauthorized)?;
    let access_token = issue_access_token(&ctx.cfg, user.id, user.role)?;

    Ok(Json(RefreshResponse {
        access_token,
        refresh_token: rotated.cleartext,
    }))
}

#[utoipa::path(post, path = "/api/auth/logout", tag = "Auth", request_body = RefreshRequest, responses((status = 204)))]
pub async fn logout(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Json(req): Json<RefreshRequest>,
) -> Result<StatusCode, ApiError> {
    actor_from_bearer(&ctx.cfg, bearer)?;
    let tokens = ctx.refresh_token_repo();
    // Idempotent: revoking an unknown token is still a successful logout.
    RevokeRefreshToken {
        repo: tokens.as_ref(),
    }
    .execute(&req.refresh_token)
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(get, path = "/api/auth/me", tag = "Auth", responses((status = 200, body = UserResponse)))]
pub async fn me(
    State(ctx): State<AppContext>,
    bearer: Bearer,
) -> Result<Json<UserResponse>, ApiError> {
    let actor = actor_from_bearer(&ctx.cfg, bearer)?;
    let repo = ctx.user_repo();
    let uc = GetMe {
        repo: repo.as_ref(),
    };
    let user = uc.execute(actor.id).await?.ok_or(ApiError::Unauthorized)?;
    Ok(Json(user.into()))
}

// --- Bearer extractor & JWT utils ---
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

pub struct Bearer(pub String);

#[axum::async_trait]
impl<S> FromRequestParts<S> for Bearer
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(auth) = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
        {
            if let Some(t) = auth.strip_prefix("Bearer ") {
                return Ok(Bearer(t.to_string()));
            }
        }
        Err(ApiError::Unauthorized)
    }
}

pub fn issue_access_token(cfg: &Config, user_id: Uuid, role: Role) -> Result<String, ApiError> {
    let now = chrono::Utc::now().timestamp() as usize;
    let claims = Claims {
        sub: user_id.to_string(),
        role: role.to_string(),
        exp: now + (cfg.jwt_expires_secs as usize),
    };
    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(cfg.jwt_secret.as_bytes()),
    )
    .map_err(|_| ApiError::Internal)
}

/// Decodes the access token into the acting principal. Expiry is checked
/// by the JWT validation; a malformed subject or role is treated the same
/// as a bad signature.
pub fn actor_from_bearer(cfg: &Config, bearer: Bearer) -> Result<Actor, ApiError> {
    let data = jsonwebtoken::decode::<Claims>(
        &bearer.0,
        &DecodingKey::from_secret(cfg.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| ApiError::Unauthorized)?;
    let id = Uuid::parse_str(&data.claims.sub).map_err(|_| ApiError::Unauthorized)?;
    let role = data
        .claims
        .role
        .parse::<Role>()
        .map_err(|_| ApiError::Unauthorized)?;
    Ok(Actor::new(id, role))
}

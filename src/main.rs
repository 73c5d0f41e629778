use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::MatchedPath;
use dotenvy::dotenv;
use http::HeaderValue;
use tokio::task::JoinHandle;
use tokio::time::{Duration, sleep};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use taskledger::application::use_cases::tokens::purge_expired::PurgeExpiredTokens;
use taskledger::bootstrap::app_context::{AppContext, AppServices};
use taskledger::bootstrap::config::Config;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
        paths(
            taskledger::presentation::http::auth::signup,
            taskledger::presentation::http::auth::login,
            taskledger::presentation::http::auth::refresh,
            taskledger::presentation::http::auth::logout,
            taskledger::presentation::http::auth::me,
            taskledger::presentation::http::users::list_users,
            taskledger::presentation::http::users::get_profile,
            taskledger::presentation::http::users::update_profile,
            taskledger::presentation::http::users::update_role,
            taskledger::presentation::http::tasks::list_tasks,
            taskledger::presentation::http::tasks::create_task,
            taskledger::presentation::http::tasks::get_task,
            taskledger::presentation::http::tasks::update_task,
            taskledger::presentation::http::tasks::delete_task,
            taskledger::presentation::http::collaborators::list_collaborators,
            taskledger::presentation::http::collaborators::add_collaborator,
            taskledger::presentation::http::collaborators::remove_collaborator,
            taskledger::presentation::http::contributors::list_contributors,
            taskledger::presentation::http::contributors::list_contributions,
            taskledger::presentation::http::expenses::log_expense,
            taskledger::presentation::http::expenses::list_expenses,
            taskledger::presentation::http::expenses::expense_summary,
            taskledger::presentation::http::expenses::get_expense,
            taskledger::presentation::http::expenses::update_expense,
            taskledger::presentation::http::expenses::delete_expense,
            taskledger::presentation::http::enterprises::list_enterprises,
            taskledger::presentation::http::enterprises::create_enterprise,
            taskledger::presentation::http::enterprises::get_enterprise,
            taskledger::presentation::http::enterprises::update_enterprise,
            taskledger::presentation::http::enterprises::delete_enterprise,
            taskledger::presentation::http::departments::list_departments,
            taskledger::presentation::http::departments::create_department,
            taskledger::presentation::http::departments::get_department,
            taskledger::presentation::http::departments::update_department,
            taskledger::presentation::http::departments::delete_department,
            taskledger::presentation::http::designations::list_designations,
            taskledger::presentation::http::designations::create_designation,
            taskledger::presentation::http::designations::get_designation,
            taskledger::presentation::http::designations::update_designation,
            taskledger::presentation::http::designations::delete_designation,
            taskledger::presentation::http::associates::list_associates,
            taskledger::presentation::http::associates::create_associate,
            taskledger::presentation::http::associates::get_associate,
            taskledger::presentation::http::associates::update_associate,
            taskledger::presentation::http::associates::delete_associate,
            taskledger::presentation::http::health::health,
        ),
        components(schemas(
            taskledger::presentation::http::auth::SignupRequest,
            taskledger::presentation::http::auth::LoginRequest,
            taskledger::presentation::http::auth::LoginResponse,
            taskledger::presentation::http::auth::RefreshRequest,
            taskledger::presentation::http::auth::RefreshResponse,
            taskledger::presentation::http::auth::UserResponse,
            taskledger::presentation::http::users::ProfileResponse,
            taskledger::presentation::http::users::UpdateProfileRequest,
            taskledger::presentation::http::users::UpdateRoleRequest,
            taskledger::presentation::http::tasks::TaskResponse,
            taskledger::presentation::http::tasks::CreateTaskRequest,
            taskledger::presentation::http::tasks::UpdateTaskRequest,
            taskledger::presentation::http::collaborators::AddCollaboratorRequest,
            taskledger::presentation::http::collaborators::CollaboratorResponse,
            taskledger::presentation::http::contributors::ContributorResponse,
            taskledger::presentation::http::expenses::ExpenseResponse,
            taskledger::presentation::http::expenses::ExpenseSummaryResponse,
            taskledger::presentation::http::expenses::LogExpenseRequest,
            taskledger::presentation::http::expenses::UpdateExpenseRequest,
            taskledger::presentation::http::enterprises::EnterpriseResponse,
            taskledger::presentation::http::enterprises::CreateEnterpriseRequest,
            taskledger::presentation::http::enterprises::UpdateEnterpriseRequest,
            taskledger::presentation::http::departments::DepartmentResponse,
            taskledger::presentation::http::departments::CreateDepartmentRequest,
            taskledger::presentation::http::departments::UpdateDepartmentRequest,
            taskledger::presentation::http::designations::DesignationResponse,
            taskledger::presentation::http::designations::CreateDesignationRequest,
            taskledger::presentation::http::designations::UpdateDesignationRequest,
            taskledger::presentation::http::associates::AssociateResponse,
            taskledger::presentation::http::associates::CreateAssociateRequest,
            taskledger::presentation::http::associates::UpdateAssociateRequest,
            taskledger::presentation::http::health::HealthResponse,
        )),
        tags(
            (name = "Auth", description = "Authentication and refresh tokens"),
            (name = "Users", description = "Accounts and profiles"),
            (name = "Tasks", description = "Task management"),
            (name = "Collaborators", description = "Task membership"),
            (name = "Contributors", description = "Contribution listings"),
            (name = "Expenses", description = "Expense tracking against task budgets"),
            (name = "Organization", description = "Enterprises, departments, designations, associates"),
            (name = "Health", description = "System health checks")
        )
    )]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "taskledger=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(?cfg, "Starting TaskLedger backend");

    // Database
    let pool = taskledger::infrastructure::db::connect_pool(&cfg.database_url).await?;
    taskledger::infrastructure::db::migrate(&pool).await?;

    let user_repo = Arc::new(
        taskledger::infrastructure::db::repositories::user_repository_sqlx::SqlxUserRepository::new(
            pool.clone(),
        ),
    );
    let task_repo = Arc::new(
        taskledger::infrastructure::db::repositories::task_repository_sqlx::SqlxTaskRepository::new(
            pool.clone(),
        ),
    );
    let collaborator_repo = Arc::new(
        taskledger::infrastructure::db::repositories::collaborator_repository_sqlx::SqlxCollaboratorRepository::new(
            pool.clone(),
        ),
    );
    let expense_repo = Arc::new(
        taskledger::infrastructure::db::repositories::expense_repository_sqlx::SqlxExpenseRepository::new(
            pool.clone(),
        ),
    );
    let enterprise_repo = Arc::new(
        taskledger::infrastructure::db::repositories::enterprise_repository_sqlx::SqlxEnterpriseRepository::new(
            pool.clone(),
        ),
    );
    let department_repo = Arc::new(
        taskledger::infrastructure::db::repositories::department_repository_sqlx::SqlxDepartmentRepository::new(
            pool.clone(),
        ),
    );
    let designation_repo = Arc::new(
        taskledger::infrastructure::db::repositories::designation_repository_sqlx::SqlxDesignationRepository::new(
            pool.clone(),
        ),
    );
    let associate_repo = Arc::new(
        taskledger::infrastructure::db::repositories::associate_repository_sqlx::SqlxAssociateRepository::new(
            pool.clone(),
        ),
    );
    let refresh_token_repo = Arc::new(
        taskledger::infrastructure::db::repositories::refresh_token_repository_sqlx::SqlxRefreshTokenRepository::new(
            pool.clone(),
        ),
    );
    let task_cache: Arc<dyn taskledger::application::ports::task_cache::TaskCache> =
        if let Some(url) = cfg.redis_url.as_deref() {
            tracing::info!("task_cache_redis_enabled");
            let client = redis::Client::open(url)?;
            Arc::new(taskledger::infrastructure::cache::RedisTaskCache::new(
                client,
                Duration::from_secs(cfg.task_cache_ttl_secs),
            ))
        } else {
            tracing::info!("task_cache_disabled_using_noop");
            Arc::new(taskledger::infrastructure::cache::NoopTaskCache)
        };

    let services = AppServices::new(
        user_repo,
        task_repo,
        collaborator_repo,
        expense_repo,
        enterprise_repo,
        department_repo,
        designation_repo,
        associate_repo,
        refresh_token_repo,
        task_cache,
    );

    let ctx = AppContext::new(cfg.clone(), services);

    // Build CORS
    let cors = if let Some(origin) = cfg.frontend_url.clone() {
        match HeaderValue::from_str(&origin) {
            Ok(v) => CorsLayer::new()
                .allow_origin(v)
                .allow_methods([
                    http::Method::GET,
                    http::Method::POST,
                    http::Method::PUT,
                    http::Method::DELETE,
                    http::Method::PATCH,
                    http::Method::OPTIONS,
                ])
                .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION])
                .allow_credentials(true),
            Err(_) => CorsLayer::new()
                .allow_origin(AllowOrigin::mirror_request())
                .allow_methods([
                    http::Method::GET,
                    http::Method::POST,
                    http::Method::PUT,
                    http::Method::DELETE,
                    http::Method::PATCH,
                    http::Method::OPTIONS,
                ])
                .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION])
                .allow_credentials(true),
        }
    } else {
        if cfg.is_production {
            // In production, FRONTEND_URL is mandatory (enforced earlier), but fallback defensively to deny all
            CorsLayer::new()
                .allow_origin(AllowOrigin::exact(HeaderValue::from_static(
                    "http://invalid",
                )))
                .allow_methods([
                    http::Method::GET,
                    http::Method::POST,
                    http::Method::PUT,
                    http::Method::DELETE,
                    http::Method::PATCH,
                    http::Method::OPTIONS,
                ])
                .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION])
        } else {
            // Development convenience
            CorsLayer::new()
                .allow_origin(AllowOrigin::mirror_request())
                .allow_methods([
                    http::Method::GET,
                    http::Method::POST,
                    http::Method::PUT,
                    http::Method::DELETE,
                    http::Method::PATCH,
                    http::Method::OPTIONS,
                ])
                .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION])
                .allow_credentials(true)
        }
    };

    // Build API router
    let app = Router::new()
        .nest(
            "/api",
            taskledger::presentation::http::health::routes(pool.clone()),
        )
        .nest(
            "/api/auth",
            taskledger::presentation::http::auth::routes(ctx.clone()),
        )
        .nest(
            "/api",
            taskledger::presentation::http::users::routes(ctx.clone()),
        )
        .nest(
            "/api",
            taskledger::presentation::http::tasks::routes(ctx.clone()),
        )
        .nest(
            "/api",
            taskledger::presentation::http::collaborators::routes(ctx.clone()),
        )
        .nest(
            "/api",
            taskledger::presentation::http::contributors::routes(ctx.clone()),
        )
        .nest(
            "/api",
            taskledger::presentation::http::expenses::routes(ctx.clone()),
        )
        .nest(
            "/api",
            taskledger::presentation::http::enterprises::routes(ctx.clone()),
        )
        .nest(
            "/api",
            taskledger::presentation::http::departments::routes(ctx.clone()),
        )
        .nest(
            "/api",
            taskledger::presentation::http::designations::routes(ctx.clone()),
        )
        .nest(
            "/api",
            taskledger::presentation::http::associates::routes(ctx.clone()),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        );

    let api_addr = SocketAddr::from(([0, 0, 0, 0], cfg.api_port));
    info!(%api_addr, "HTTP API listening");
    let listener = tokio::net::TcpListener::bind(api_addr).await?;

    let api_handle: JoinHandle<anyhow::Result<()>> = tokio::spawn(async move {
        axum::serve(listener, app).await?;
        Ok(())
    });

    // Background purge of expired refresh tokens
    let purge_repo = ctx.refresh_token_repo();
    let purge_interval = Duration::from_secs(cfg.token_purge_interval_secs);
    tokio::spawn(async move {
        loop {
            let uc = PurgeExpiredTokens {
                repo: purge_repo.as_ref(),
            };
            match uc.execute().await {
                Ok(0) => {}
                Ok(purged) => tracing::info!(purged, "expired_refresh_tokens_purged"),
                Err(e) => tracing::error!(error = ?e, "token_purge_failed"),
            }
            sleep(purge_interval).await;
        }
    });

    match api_handle.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => error!(?e, "API server task failed"),
        Err(e) => error!(?e, "API server task panicked"),
    }
    Ok(())
}

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::use_cases::expenses::delete_expense::DeleteExpense;
use crate::application::use_cases::expenses::expense_summary::GetExpenseSummary;
use crate::application::use_cases::expenses::get_expense::GetExpense;
use crate::application::use_cases::expenses::list_expenses::ListExpenses;
use crate::application::use_cases::expenses::log_expense::{LogExpense, LogExpenseInput};
use crate::application::use_cases::expenses::update_expense::UpdateExpense;
use crate::bootstrap::app_context::AppContext;
use crate::domain::expenses::expense::{Expense, ExpenseSummary};
use crate::presentation::http::auth::{self, Bearer};
use crate::presentation::http::error::ApiError;

#[derive(Debug, Serialize, ToSchema)]
pub struct ExpenseResponse {
    pub id: Uuid,
    pub task_id: Uuid,
    pub author_id: Uuid,
    pub description: String,
    pub amount: Decimal,
    pub incurred_on: chrono::NaiveDate,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Expense> for ExpenseResponse {
    fn from(expense: Expense) -> Self {
        Self {
            id: expense.id,
            task_id: expense.task_id,
            author_id: expense.author_id,
            description: expense.description,
            amount: expense.amount,
            incurred_on: expense.incurred_on,
            created_at: expense.created_at,
            updated_at: expense.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ExpenseSummaryResponse {
    pub task_id: Uuid,
    pub budget: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
}

impl From<ExpenseSummary> for ExpenseSummaryResponse {
    fn from(summary: ExpenseSummary) -> Self {
        Self {
            task_id: summary.task_id,
            budget: summary.budget,
            spent: summary.spent,
            remaining: summary.remaining,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LogExpenseRequest {
    pub description: String,
    pub amount: Decimal,
    pub incurred_on: Option<chrono::NaiveDate>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateExpenseRequest {
    pub description: Option<String>,
    pub amount: Option<Decimal>,
    pub incurred_on: Option<chrono::NaiveDate>,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/tasks/:id/expenses", get(list_expenses).post(log_expense))
        .route("/tasks/:id/expenses/summary", get(expense_summary))
        .route(
            "/expenses/:id",
            get(get_expense).patch(update_expense).delete(delete_expense),
        )
        .with_state(ctx)
}

#[utoipa::path(post, path = "/api/tasks/{id}/expenses", tag = "Expenses",
    params(("id" = Uuid, Path, description = "Task ID")),
    request_body = LogExpenseRequest,
    responses((status = 200, body = ExpenseResponse), (status = 400), (status = 403), (status = 404)))]
pub async fn log_expense(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<Uuid>,
    Json(req): Json<LogExpenseRequest>,
) -> Result<Json<ExpenseResponse>, ApiError> {
    let actor = auth::actor_from_bearer(&ctx.cfg, bearer)?;
    let repo = ctx.task_repo();
    let members = ctx.collaborator_repo();
    let expenses = ctx.expense_repo();
    let uc = LogExpense {
        repo: repo.as_ref(),
        members: members.as_ref(),
        expenses: expenses.as_ref(),
    };
    let expense = uc
        .execute(
            &actor,
            id,
            LogExpenseInput {
                description: req.description,
                amount: req.amount,
                incurred_on: req.incurred_on,
            },
        )
        .await?;
    Ok(Json(expense.into()))
}

#[utoipa::path(get, path = "/api/tasks/{id}/expenses", tag = "Expenses",
    params(("id" = Uuid, Path, description = "Task ID")),
    responses((status = 200, body = [ExpenseResponse]), (status = 404)))]
pub async fn list_expenses(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ExpenseResponse>>, ApiError> {
    let actor = auth::actor_from_bearer(&ctx.cfg, bearer)?;
    let repo = ctx.task_repo();
    let members = ctx.collaborator_repo();
    let expenses = ctx.expense_repo();
    let uc = ListExpenses {
        repo: repo.as_ref(),
        members: members.as_ref(),
        expenses: expenses.as_ref(),
    };
    let list = uc.execute(&actor, id).await?;
    Ok(Json(list.into_iter().map(ExpenseResponse::from).collect()))
}

#[utoipa::path(get, path = "/api/tasks/{id}/expenses/summary", tag = "Expenses",
    params(("id" = Uuid, Path, description = "Task ID")),
    responses((status = 200, body = ExpenseSummaryResponse), (status = 404)))]
pub async fn expense_summary(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<Uuid>,
) -> Result<Json<ExpenseSummaryResponse>, ApiError> {
    let actor = auth::actor_from_bearer(&ctx.cfg, bearer)?;
    let repo = ctx.task_repo();
    let members = ctx.collaborator_repo();
    let expenses = ctx.expense_repo();
    let uc = GetExpenseSummary {
        repo: repo.as_ref(),
        members: members.as_ref(),
        expenses: expenses.as_ref(),
    };
    let summary = uc.execute(&actor, id).await?;
    Ok(Json(summary.into()))
}

#[utoipa::path(get, path = "/api/expenses/{id}", tag = "Expenses",
    params(("id" = Uuid, Path, description = "Expense ID")),
    responses((status = 200, body = ExpenseResponse), (status = 404)))]
pub async fn get_expense(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<Uuid>,
) -> Result<Json<ExpenseResponse>, ApiError> {
    let actor = auth::actor_from_bearer(&ctx.cfg, bearer)?;
    let repo = ctx.task_repo();
    let members = ctx.collaborator_repo();
    let expenses = ctx.expense_repo();
    let uc = GetExpense {
        repo: repo.as_ref(),
        members: members.as_ref(),
        expenses: expenses.as_ref(),
    };
    let expense = uc.execute(&actor, id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(expense.into()))
}

#[utoipa::path(patch, path = "/api/expenses/{id}", tag = "Expenses",
    params(("id" = Uuid, Path, description = "Expense ID")),
    request_body = UpdateExpenseRequest,
    responses((status = 200, body = ExpenseResponse), (status = 400), (status = 403), (status = 404)))]
pub async fn update_expense(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateExpenseRequest>,
) -> Result<Json<ExpenseResponse>, ApiError> {
    let actor = auth::actor_from_bearer(&ctx.cfg, bearer)?;
    let repo = ctx.task_repo();
    let members = ctx.collaborator_repo();
    let expenses = ctx.expense_repo();
    let uc = UpdateExpense {
        repo: repo.as_ref(),
        members: members.as_ref(),
        expenses: expenses.as_ref(),
    };
    let expense = uc
        .execute(&actor, id, req.description, req.amount, req.incurred_on)
        .await?;
    Ok(Json(expense.into()))
}

#[utoipa::path(delete, path = "/api/expenses/{id}", tag = "Expenses",
    params(("id" = Uuid, Path, description = "Expense ID")),
    responses((status = 204), (status = 403), (status = 404)))]
pub async fn delete_expense(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let actor = auth::actor_from_bearer(&ctx.cfg, bearer)?;
    let repo = ctx.task_repo();
    let members = ctx.collaborator_repo();
    let expenses = ctx.expense_repo();
    let uc = DeleteExpense {
        repo: repo.as_ref(),
        members: members.as_ref(),
        expenses: expenses.as_ref(),
    };
    uc.execute(&actor, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub mod delete_expense;
pub mod expense_summary;
pub mod get_expense;
pub mod list_expenses;
pub mod log_expense;
pub mod update_expense;

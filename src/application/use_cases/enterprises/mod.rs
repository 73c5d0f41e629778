pub mod create_enterprise;
pub mod delete_enterprise;
pub mod get_enterprise;
pub mod list_enterprises;
pub mod update_enterprise;

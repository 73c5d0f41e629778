pub mod create_designation;
pub mod delete_designation;
pub mod get_designation;
pub mod list_designations;
pub mod update_designation;

pub mod create_associate;
pub mod delete_associate;
pub mod get_associate;
pub mod list_associates;
pub mod update_associate;

pub mod get_profile;
pub mod list_users;
pub mod update_profile;
pub mod update_role;

pub mod add_collaborator;
pub mod list_collaborators;
pub mod remove_collaborator;

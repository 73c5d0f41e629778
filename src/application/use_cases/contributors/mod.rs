pub mod list_contributions;
pub mod list_contributors;

pub mod expenses;
pub mod orgs;
pub mod tasks;
pub mod tokens;
pub mod users;

use crate::application::access::AccessDenied;

pub mod associates;
pub mod auth;
pub mod collaborators;
pub mod contributors;
pub mod departments;
pub mod designations;
pub mod enterprises;
pub mod expenses;
pub mod tasks;
pub mod tokens;
pub mod users;

/// Outcome of a guarded operation. The presentation layer maps these onto
/// HTTP statuses; `NotFound` covers both missing rows and resources the
/// actor may not know exist.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("not found")]
    NotFound,
    #[error("forbidden")]
    Forbidden,
    #[error("{0}")]
    Invalid(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AccessDenied> for ActionError {
    fn from(denied: AccessDenied) -> Self {
        match denied {
            AccessDenied::Hidden => ActionError::NotFound,
            AccessDenied::Forbidden => ActionError::Forbidden,
        }
    }
}

impl ActionError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        ActionError::Invalid(msg.into())
    }
}

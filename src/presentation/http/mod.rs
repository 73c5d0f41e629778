pub mod associates;
pub mod auth;
pub mod collaborators;
pub mod contributors;
pub mod departments;
pub mod designations;
pub mod enterprises;
pub mod error;
pub mod expenses;
pub mod health;
pub mod tasks;
pub mod users;

use serde::Deserialize;

/// Distinguishes an absent PATCH field from an explicit `null`. Absent
/// means keep the current value; `null` clears a nullable column.
#[derive(Debug, Clone)]
pub enum DoubleOption<T> {
    NotProvided,
    Null,
    Some(T),
}

impl<T> Default for DoubleOption<T> {
    fn default() -> Self {
        DoubleOption::NotProvided
    }
}

impl<T> DoubleOption<T> {
    /// Port patches encode the same three states as `Option<Option<T>>`.
    pub fn into_patch(self) -> Option<Option<T>> {
        match self {
            DoubleOption::NotProvided => None,
            DoubleOption::Null => Some(None),
            DoubleOption::Some(value) => Some(Some(value)),
        }
    }
}

pub fn deserialize_double_option<'de, D, T>(deserializer: D) -> Result<DoubleOption<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(|opt| match opt {
        None => DoubleOption::Null,
        Some(value) => DoubleOption::Some(value),
    })
}

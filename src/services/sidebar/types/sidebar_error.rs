use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Search,
    Filter,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InputField::Search => write!(f, "search"),
            InputField::Filter => write!(f, "filter"),
        }
    }
}

/// Failures that end a sidebar operation and are shown to the user.
///
/// Failed resolutions of single candidates are not represented here, they
/// only count towards `SearchOutcome::omitted`.
#[derive(Debug, Error, PartialEq)]
pub enum SidebarError {
    #[error("Please provide {0} parameter")]
    Validation(InputField),
    #[error("{query} not found! Please try another search!")]
    Lookup { query: String },
    #[error("No place titled {title}")]
    NotFound { title: String },
}

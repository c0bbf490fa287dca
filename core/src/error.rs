//! Error kinds for list and todo operations.

use std::fmt;
use thiserror::Error;

/// Which kind of name failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameKind {
    /// A list name
    List,
    /// A todo name
    Todo,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => write!(f, "List name"),
            Self::Todo => write!(f, "Todo"),
        }
    }
}

/// Which collection an index was looked up in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    /// The session's list collection
    List,
    /// A list's todo collection
    Todo,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => write!(f, "list"),
            Self::Todo => write!(f, "todo"),
        }
    }
}

/// Errors produced while validating and applying list operations.
///
/// The `Display` text is the user-facing message placed in the session's
/// error slot.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ListError {
    /// Name is empty or longer than the maximum length
    #[error("{0} must be between 1 and 100 characters.")]
    InvalidLength(NameKind),

    /// Another list already has this name
    #[error("List name must be unique.")]
    DuplicateName,

    /// Index is malformed or out of range
    #[error("The specified {0} was not found.")]
    NotFound(Resource),

    /// The `completed` field was neither `"true"` nor `"false"`
    #[error("Invalid completed value {0:?}: expected \"true\" or \"false\".")]
    MalformedInput(String),
}

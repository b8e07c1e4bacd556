//! Reference resolution errors.

use crate::reference::rules::ResourceKind;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ReferenceResult<T> = Result<T, ReferenceError>;

/// Why an input could not be turned into a reference at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// No object was supplied.
    MissingObject,
    /// The string input was empty.
    EmptyText,
}

impl Display for InvalidReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingObject => f.write_str("no input object was supplied"),
            Self::EmptyText => f.write_str("input text must not be empty"),
        }
    }
}

/// Resolution failure. Unrecognized string shapes are never an error; they
/// resolve to a free-form name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceError {
    InvalidReference(InvalidReason),
    /// The input's shape is an id shape of more than one resource kind in
    /// the resolver's scope.
    AmbiguousLengthMatch {
        length: usize,
        kinds: Vec<ResourceKind>,
    },
    /// Not a mailbox setting name.
    UnknownSetting(String),
}

impl Display for ReferenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidReference(reason) => write!(f, "invalid reference: {reason}"),
            Self::AmbiguousLengthMatch { length, kinds } => {
                let kinds = kinds
                    .iter()
                    .map(|kind| kind.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(
                    f,
                    "identifier of length {length} matches more than one resource kind: {kinds}"
                )
            }
            Self::UnknownSetting(value) => write!(f, "unknown mailbox setting `{value}`"),
        }
    }
}

impl Error for ReferenceError {}

impl From<InvalidReason> for ReferenceError {
    fn from(value: InvalidReason) -> Self {
        Self::InvalidReference(value)
    }
}

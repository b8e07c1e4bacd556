//! Value-parse errors for model enums.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Raised when a string does not name a member of a closed model enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    UnknownFlagStatus(String),
    UnknownColorKey(String),
    UnknownColorName(String),
    UnknownBodyType(String),
    UnknownWellKnownFolder(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownFlagStatus(value) => write!(
                f,
                "flag status `{value}` is invalid; expected notFlagged|complete|flagged"
            ),
            Self::UnknownColorKey(value) => {
                write!(f, "category color key is unknown: {value}")
            }
            Self::UnknownColorName(value) => {
                write!(f, "category color name is unknown: {value}")
            }
            Self::UnknownBodyType(value) => {
                write!(f, "message body type `{value}` is invalid; expected text|html")
            }
            Self::UnknownWellKnownFolder(value) => {
                write!(f, "not a well-known folder name: {value}")
            }
        }
    }
}

impl Error for ModelError {}

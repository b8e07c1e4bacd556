//! Reference resolution.
//!
//! # Responsibility
//! - Turn caller input (a resource object, a free string, a well-known folder
//!   or a GUID) into one normalized [`Reference`] that names which rule
//!   produced it.
//! - Keep per-kind string rules in one table instead of spreading length
//!   checks over call sites.
//!
//! # Invariants
//! - Only a missing object or an empty string is invalid input.
//! - A reference never changes after construction.
//! - Re-resolving the id or name of a reference built from a string yields
//!   the same kind of reference again. References built from objects do not
//!   round-trip: their id or name comes back as an explicit id or a name.

pub mod error;
pub mod input;
pub mod parameter;
pub mod resolver;
pub mod rules;
pub mod value;

pub use error::{InvalidReason, ReferenceError, ReferenceResult};
pub use input::{Addressable, MailboxSettingKind, ReferenceInput, ReferenceSource, ResourceObject};
pub use parameter::{
    AttachmentParameter, CategoryParameter, FolderParameter, MailFolderIdParameter,
    MailMessageOrMailFolderParameter, MailMessageParameter, MailboxSettingParameter,
    MessageOrFolderParameter, MessageParameter, TeamParameter,
};
pub use resolver::{AmbiguityPolicy, ReferenceResolver};
pub use rules::{IdShape, ResolutionRules, ResourceKind, WellKnownMode};
pub use value::{Reference, SourceKind};

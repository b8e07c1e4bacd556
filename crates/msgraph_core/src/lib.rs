//! Resource references and resource schema for the Microsoft Graph mail,
//! teams and directory API.
//! This crate decides which remote resource a caller means; it never talks
//! to the network.

pub mod logging;
pub mod model;
pub mod reference;

pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig};
pub use model::error::ModelError;
pub use model::mail::WellKnownFolder;
pub use reference::{
    AmbiguityPolicy, InvalidReason, Reference, ReferenceError, ReferenceInput, ReferenceResolver,
    ReferenceResult, ResourceKind, SourceKind,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

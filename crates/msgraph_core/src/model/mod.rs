//! Resource schema of the remote directory, mail and teams API.
//!
//! # Responsibility
//! - Mirror the JSON resource shapes as plain records with serde derives.
//! - Offer small derived accessors computed from the backing fields.
//!
//! # Invariants
//! - Derived accessors are pure and recomputed on every call.
//! - Records carry no behaviour beyond those accessors; fetching, decoding
//!   and persisting them belongs to callers.

pub mod attachment;
pub mod category;
pub mod common;
pub mod error;
pub mod mail;
pub mod mailbox_settings;
pub mod team;
pub mod token;
pub mod user;

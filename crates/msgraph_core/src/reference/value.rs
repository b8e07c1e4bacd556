//! Normalized reference value.

use crate::reference::input::ReferenceSource;
use std::fmt::{Display, Formatter};

/// Rule that produced a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Copied from a concrete resource; id and name both known.
    ConcreteObject,
    /// Reserved folder name; `name` is authoritative.
    WellKnownName,
    /// Opaque id or GUID; `id` is authoritative.
    ExplicitId,
    /// Anything else; `name` is authoritative.
    FreeformName,
}

impl SourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ConcreteObject => "concrete_object",
            Self::WellKnownName => "well_known_name",
            Self::ExplicitId => "explicit_id",
            Self::FreeformName => "freeform_name",
        }
    }
}

impl Display for SourceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable pointer to one remote resource.
#[derive(Debug, Clone, PartialEq)]
pub struct Reference {
    id: Option<String>,
    name: Option<String>,
    source_kind: SourceKind,
    original_input: ReferenceSource,
}

impl Reference {
    pub(crate) fn new(
        id: Option<String>,
        name: Option<String>,
        source_kind: SourceKind,
        original_input: ReferenceSource,
    ) -> Self {
        Self {
            id,
            name,
            source_kind,
            original_input,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn source_kind(&self) -> SourceKind {
        self.source_kind
    }

    pub fn original_input(&self) -> &ReferenceSource {
        &self.original_input
    }

    pub fn is_well_known(&self) -> bool {
        self.source_kind == SourceKind::WellKnownName
    }

    /// Type label of the input this reference was built from.
    pub fn type_name(&self) -> &'static str {
        self.original_input.type_name()
    }

    /// Value a request builder should address: the id when known, else the
    /// name or well-known token.
    pub fn lookup_key(&self) -> Option<&str> {
        self.id().or(self.name())
    }
}

impl Display for Reference {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match [self.name(), self.id()]
            .into_iter()
            .flatten()
            .find(|value| !value.is_empty())
        {
            Some(value) => f.write_str(value),
            None => Display::fmt(&self.original_input, f),
        }
    }
}

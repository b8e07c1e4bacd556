//! Reference resolver.
//!
//! # Responsibility
//! - Classify caller input into a [`Reference`] for one resolution scope.
//!
//! # Invariants
//! - Resolution is pure and deterministic; the resolver holds no mutable state.
//! - String rules apply first-match-wins: well-known name, then GUID (for GUID
//!   kinds), then id shape, then free-form name. Kinds with an id fallback
//!   take every remaining string as an id instead of a name.
//! - Only missing objects and empty strings fail, plus shape collisions across
//!   kinds when the ambiguity policy rejects them.
//! - Logs carry kinds and lengths only, never the input text.

use crate::model::mail::WellKnownFolder;
use crate::reference::error::{InvalidReason, ReferenceError, ReferenceResult};
use crate::reference::input::{Addressable, ReferenceInput, ReferenceSource, ResourceObject};
use crate::reference::rules::{ResolutionRules, ResourceKind, WellKnownMode};
use crate::reference::value::{Reference, SourceKind};
use log::{debug, warn};
use once_cell::sync::Lazy;
use uuid::Uuid;

static SCOPED_RESOLVERS: Lazy<Vec<ReferenceResolver>> = Lazy::new(|| {
    ResourceKind::ALL
        .iter()
        .map(|kind| ReferenceResolver::new(*kind))
        .collect()
});

/// What to do when an input matches id shapes of several kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AmbiguityPolicy {
    /// Fail with [`ReferenceError::AmbiguousLengthMatch`].
    #[default]
    Reject,
    /// Take the first matching shape in scope order and log a warning.
    FirstMatch,
}

/// Resolver bound to one resource kind or a union of kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceResolver {
    kinds: Vec<ResourceKind>,
    rules: ResolutionRules,
    policy: AmbiguityPolicy,
}

impl ReferenceResolver {
    pub fn new(kind: ResourceKind) -> Self {
        Self {
            kinds: vec![kind],
            rules: kind.rules(),
            policy: AmbiguityPolicy::default(),
        }
    }

    /// Shared single-kind resolver with the default policy.
    pub fn scoped(kind: ResourceKind) -> &'static ReferenceResolver {
        &SCOPED_RESOLVERS[kind as usize]
    }

    /// Resolver accepting the id shapes of every listed kind.
    pub fn combined(kinds: &[ResourceKind]) -> Self {
        Self {
            kinds: kinds.to_vec(),
            rules: ResolutionRules::union(kinds),
            policy: AmbiguityPolicy::default(),
        }
    }

    pub fn with_ambiguity_policy(mut self, policy: AmbiguityPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn kinds(&self) -> &[ResourceKind] {
        &self.kinds
    }

    pub fn rules(&self) -> &ResolutionRules {
        &self.rules
    }

    pub fn ambiguity_policy(&self) -> AmbiguityPolicy {
        self.policy
    }

    /// Resolves any accepted input shape.
    ///
    /// # Errors
    /// - `InvalidReference` for a missing object or an empty string.
    /// - `AmbiguousLengthMatch` when the string matches id shapes of more than
    ///   one kind and the policy is [`AmbiguityPolicy::Reject`].
    pub fn resolve(&self, input: impl Into<ReferenceInput>) -> ReferenceResult<Reference> {
        match input.into() {
            ReferenceInput::Missing => {
                debug!(
                    "event=reference_resolve module=reference status=error scope={} reason=missing_object",
                    self.scope_label()
                );
                Err(InvalidReason::MissingObject.into())
            }
            ReferenceInput::Object(object) => Ok(self.resolve_object(object)),
            ReferenceInput::Text(text) => self.resolve_text(text),
            ReferenceInput::WellKnown(folder) => Ok(self.resolve_well_known(folder)),
            ReferenceInput::Guid(id) => self.resolve_guid(id),
        }
    }

    /// Copies id and name from a concrete resource. Never fails.
    ///
    /// Scopes whose rules drop object names keep only the id.
    pub fn resolve_object(&self, object: impl Into<ResourceObject>) -> Reference {
        let object = object.into();
        let name = if self.rules.object_names {
            object.reference_name().map(str::to_string)
        } else {
            None
        };
        let reference = Reference::new(
            object.reference_id(),
            name,
            SourceKind::ConcreteObject,
            ReferenceSource::Object(object),
        );
        self.log_resolved(&reference, None);
        reference
    }

    /// Builds a well-known reference without string matching.
    pub fn resolve_well_known(&self, folder: WellKnownFolder) -> Reference {
        let reference = self.well_known_reference(folder, ReferenceSource::WellKnown(folder));
        self.log_resolved(&reference, None);
        reference
    }

    /// Resolves a GUID value.
    ///
    /// GUID scopes take it as an explicit id in canonical form. Every other
    /// scope classifies its canonical text with the ordinary string rules, so
    /// a GUID never passes for a folder or message id by type alone.
    pub fn resolve_guid(&self, id: Uuid) -> ReferenceResult<Reference> {
        if self.rules.guid_ids {
            return Ok(self.guid_reference(id));
        }
        self.classify_text(&canonical_guid(id), ReferenceSource::Guid(id))
    }

    /// Explicit-id reference for a GUID, skipping the scope check. Only called
    /// for GUID kinds.
    pub(crate) fn guid_reference(&self, id: Uuid) -> Reference {
        let reference = Reference::new(
            Some(canonical_guid(id)),
            None,
            SourceKind::ExplicitId,
            ReferenceSource::Guid(id),
        );
        self.log_resolved(&reference, None);
        reference
    }

    fn resolve_text(&self, text: String) -> ReferenceResult<Reference> {
        if text.is_empty() {
            debug!(
                "event=reference_resolve module=reference status=error scope={} reason=empty_text",
                self.scope_label()
            );
            return Err(InvalidReason::EmptyText.into());
        }
        let source = ReferenceSource::Text(text.clone());
        self.classify_text(&text, source)
    }

    fn classify_text(&self, text: &str, source: ReferenceSource) -> ReferenceResult<Reference> {
        let input_len = text.chars().count();

        let reference = if let Some(folder) = self
            .rules
            .well_known
            .and_then(|_| WellKnownFolder::from_name(text))
        {
            self.well_known_reference(folder, source)
        } else if let Some(id) = self.rules.guid_ids.then(|| parse_guid(text)).flatten() {
            Reference::new(Some(canonical_guid(id)), None, SourceKind::ExplicitId, source)
        } else if self.matches_id_shape(text)? || self.rules.id_fallback {
            Reference::new(Some(text.to_string()), None, SourceKind::ExplicitId, source)
        } else {
            Reference::new(None, Some(text.to_string()), SourceKind::FreeformName, source)
        };

        self.log_resolved(&reference, Some(input_len));
        Ok(reference)
    }

    fn matches_id_shape(&self, text: &str) -> ReferenceResult<bool> {
        let mut owners: Vec<ResourceKind> = Vec::new();
        for shape in self.rules.matching_shapes(text) {
            if !owners.contains(&shape.owner) {
                owners.push(shape.owner);
            }
        }

        if owners.len() > 1 {
            let length = text.chars().count();
            match self.policy {
                AmbiguityPolicy::Reject => {
                    debug!(
                        "event=reference_resolve module=reference status=error scope={} reason=ambiguous_length input_len={}",
                        self.scope_label(),
                        length
                    );
                    return Err(ReferenceError::AmbiguousLengthMatch {
                        length,
                        kinds: owners,
                    });
                }
                AmbiguityPolicy::FirstMatch => {
                    warn!(
                        "event=reference_ambiguous module=reference status=ok scope={} input_len={} chosen={}",
                        self.scope_label(),
                        length,
                        owners[0]
                    );
                }
            }
        }

        Ok(!owners.is_empty())
    }

    fn well_known_reference(&self, folder: WellKnownFolder, source: ReferenceSource) -> Reference {
        let name = folder.as_str().to_string();
        let id = match self.rules.well_known {
            Some(WellKnownMode::NameAndId) => Some(name.clone()),
            _ => None,
        };
        Reference::new(id, Some(name), SourceKind::WellKnownName, source)
    }

    fn scope_label(&self) -> String {
        self.kinds
            .iter()
            .map(|kind| kind.as_str())
            .collect::<Vec<_>>()
            .join("+")
    }

    fn log_resolved(&self, reference: &Reference, input_len: Option<usize>) {
        debug!(
            "event=reference_resolve module=reference status=ok scope={} source_kind={} input_type={} input_len={}",
            self.scope_label(),
            reference.source_kind(),
            reference.type_name(),
            input_len.map_or_else(|| "-".to_string(), |len| len.to_string())
        );
    }
}

fn canonical_guid(id: Uuid) -> String {
    id.hyphenated().to_string()
}

/// Accepts the 32-digit, hyphenated, braced and parenthesized GUID forms.
/// The `urn:uuid:` form is not a GUID string to the remote API.
fn parse_guid(text: &str) -> Option<Uuid> {
    if text.get(..4).is_some_and(|prefix| prefix.eq_ignore_ascii_case("urn:")) {
        return None;
    }
    match text.strip_prefix('(').and_then(|rest| rest.strip_suffix(')')) {
        Some(inner) if inner.len() == 36 => Uuid::try_parse(inner).ok(),
        Some(_) => None,
        None => Uuid::try_parse(text).ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::{AmbiguityPolicy, ReferenceResolver};
    use crate::model::mail::{Folder, WellKnownFolder};
    use crate::reference::error::{InvalidReason, ReferenceError};
    use crate::reference::rules::ResourceKind;
    use crate::reference::value::SourceKind;
    use uuid::Uuid;

    fn padded_id(length: usize) -> String {
        "A".repeat(length - 1) + "="
    }

    #[test]
    fn well_known_text_sets_name_and_id_for_folders() {
        let reference = ReferenceResolver::new(ResourceKind::MailFolder)
            .resolve("DeletedItems")
            .expect("well-known name resolves");
        assert_eq!(reference.source_kind(), SourceKind::WellKnownName);
        assert_eq!(reference.name(), Some("deleteditems"));
        assert_eq!(reference.id(), Some("deleteditems"));
        assert!(reference.is_well_known());
    }

    #[test]
    fn message_or_folder_well_known_keeps_id_empty() {
        let reference = ReferenceResolver::new(ResourceKind::MessageOrFolder)
            .resolve("Inbox")
            .expect("well-known name resolves");
        assert_eq!(reference.name(), Some("inbox"));
        assert_eq!(reference.id(), None);
    }

    #[test]
    fn kinds_without_well_known_treat_folder_names_as_freeform() {
        let reference = ReferenceResolver::new(ResourceKind::Message)
            .resolve("inbox")
            .expect("text resolves");
        assert_eq!(reference.source_kind(), SourceKind::FreeformName);
        assert_eq!(reference.name(), Some("inbox"));
    }

    #[test]
    fn shaped_text_becomes_explicit_id_unchanged() {
        let id = "aB".repeat(52);
        let reference = ReferenceResolver::new(ResourceKind::MailFolder)
            .resolve(id.as_str())
            .expect("folder id resolves");
        assert_eq!(reference.source_kind(), SourceKind::ExplicitId);
        assert_eq!(reference.id(), Some(id.as_str()));
        assert_eq!(reference.name(), None);
    }

    #[test]
    fn mail_message_requires_padding() {
        let resolver = ReferenceResolver::new(ResourceKind::MailMessage);
        let padded = resolver.resolve(padded_id(152)).expect("padded id resolves");
        assert_eq!(padded.source_kind(), SourceKind::ExplicitId);

        let unpadded = resolver.resolve("A".repeat(152)).expect("text resolves");
        assert_eq!(unpadded.source_kind(), SourceKind::FreeformName);
    }

    #[test]
    fn guid_kinds_parse_and_canonicalize() {
        let resolver = ReferenceResolver::new(ResourceKind::Team);
        let reference = resolver
            .resolve("{0B9A2A4E-5F40-4D8B-9A8E-2B3F1C6D7E80}")
            .expect("guid resolves");
        assert_eq!(reference.source_kind(), SourceKind::ExplicitId);
        assert_eq!(reference.id(), Some("0b9a2a4e-5f40-4d8b-9a8e-2b3f1c6d7e80"));

        let reference = resolver.resolve("Platform Team").expect("name resolves");
        assert_eq!(reference.source_kind(), SourceKind::FreeformName);
        assert_eq!(reference.name(), Some("Platform Team"));
    }

    #[test]
    fn guid_kinds_ignore_well_known_and_shapes() {
        let resolver = ReferenceResolver::new(ResourceKind::Category);
        let reference = resolver.resolve("inbox").expect("text resolves");
        assert_eq!(reference.source_kind(), SourceKind::FreeformName);
        let reference = resolver.resolve(padded_id(152)).expect("text resolves");
        assert_eq!(reference.source_kind(), SourceKind::FreeformName);
    }

    #[test]
    fn direct_inputs_bypass_string_rules() {
        let resolver = ReferenceResolver::new(ResourceKind::MailFolder);
        let reference = resolver
            .resolve(WellKnownFolder::SentItems)
            .expect("well-known resolves");
        assert_eq!(reference.source_kind(), SourceKind::WellKnownName);
        assert_eq!(reference.id(), Some("sentitems"));
        assert_eq!(reference.type_name(), "WellKnownFolder");

        let id = Uuid::new_v4();
        let reference = ReferenceResolver::new(ResourceKind::Team)
            .resolve(id)
            .expect("guid resolves");
        assert_eq!(reference.source_kind(), SourceKind::ExplicitId);
        assert_eq!(reference.id(), Some(id.hyphenated().to_string().as_str()));
        assert_eq!(reference.type_name(), "Guid");
    }

    #[test]
    fn guid_values_outside_guid_scopes_follow_string_rules() {
        let reference = ReferenceResolver::new(ResourceKind::MailFolder)
            .resolve(Uuid::nil())
            .expect("guid resolves");
        assert_eq!(reference.source_kind(), SourceKind::FreeformName);
        assert_eq!(reference.id(), None);
        assert_eq!(reference.name(), Some("00000000-0000-0000-0000-000000000000"));
        assert_eq!(reference.type_name(), "Guid");

        let reference = ReferenceResolver::new(ResourceKind::Message)
            .resolve(Uuid::nil())
            .expect("guid resolves");
        assert_eq!(reference.source_kind(), SourceKind::FreeformName);
    }

    #[test]
    fn guid_text_rejects_urn_form_and_accepts_parentheses() {
        let resolver = ReferenceResolver::new(ResourceKind::Category);
        let urn = "urn:uuid:0b9a2a4e-5f40-4d8b-9a8e-2b3f1c6d7e80";
        let reference = resolver.resolve(urn).expect("text resolves");
        assert_eq!(reference.source_kind(), SourceKind::FreeformName);
        assert_eq!(reference.name(), Some(urn));

        let reference = resolver
            .resolve("(0B9A2A4E-5F40-4D8B-9A8E-2B3F1C6D7E80)")
            .expect("guid resolves");
        assert_eq!(reference.source_kind(), SourceKind::ExplicitId);
        assert_eq!(reference.id(), Some("0b9a2a4e-5f40-4d8b-9a8e-2b3f1c6d7e80"));

        let reference = resolver.resolve("(0b9a2a4e5f404d8b9a8e2b3f1c6d7e80)").expect("text resolves");
        assert_eq!(reference.source_kind(), SourceKind::FreeformName);
    }

    #[test]
    fn id_only_kinds_take_unmatched_text_as_id() {
        let folder = ReferenceResolver::new(ResourceKind::MailFolderId);
        let reference = folder.resolve("Archive 2023").expect("text resolves");
        assert_eq!(reference.source_kind(), SourceKind::ExplicitId);
        assert_eq!(reference.id(), Some("Archive 2023"));
        assert_eq!(reference.name(), None);

        let reference = folder.resolve("Inbox").expect("well-known resolves");
        assert_eq!(reference.source_kind(), SourceKind::WellKnownName);
        assert_eq!(reference.id(), Some("inbox"));

        let either = ReferenceResolver::new(ResourceKind::MailMessageOrMailFolder);
        let reference = either.resolve("AAMkshortid").expect("text resolves");
        assert_eq!(reference.source_kind(), SourceKind::ExplicitId);
        assert_eq!(reference.id(), Some("AAMkshortid"));

        let reference = either.resolve("outbox").expect("well-known resolves");
        assert_eq!(reference.name(), Some("outbox"));
        assert_eq!(reference.id(), None);
    }

    #[test]
    fn id_only_message_or_folder_scope_drops_object_names() {
        let folder = Folder {
            id: Some("F7".to_string()),
            display_name: Some("Reports".to_string()),
            ..Folder::default()
        };
        let reference = ReferenceResolver::new(ResourceKind::MailMessageOrMailFolder).resolve_object(folder);
        assert_eq!(reference.source_kind(), SourceKind::ConcreteObject);
        assert_eq!(reference.id(), Some("F7"));
        assert_eq!(reference.name(), None);
    }

    #[test]
    fn missing_object_and_empty_text_are_invalid() {
        let resolver = ReferenceResolver::new(ResourceKind::MailFolder);
        let err = resolver.resolve(None::<Folder>).unwrap_err();
        assert_eq!(err, ReferenceError::InvalidReference(InvalidReason::MissingObject));
        let err = resolver.resolve("").unwrap_err();
        assert_eq!(err, ReferenceError::InvalidReference(InvalidReason::EmptyText));
    }

    #[test]
    fn combined_scope_rejects_cross_kind_collisions_by_default() {
        let resolver = ReferenceResolver::combined(&[ResourceKind::Message, ResourceKind::MailMessage]);
        let err = resolver.resolve(padded_id(152)).unwrap_err();
        assert_eq!(
            err,
            ReferenceError::AmbiguousLengthMatch {
                length: 152,
                kinds: vec![ResourceKind::Message, ResourceKind::MailMessage],
            }
        );

        let reference = resolver
            .clone()
            .with_ambiguity_policy(AmbiguityPolicy::FirstMatch)
            .resolve(padded_id(152))
            .expect("first match wins");
        assert_eq!(reference.source_kind(), SourceKind::ExplicitId);

        // 136 belongs to Message only.
        let reference = resolver.resolve("A".repeat(136)).expect("unambiguous id");
        assert_eq!(reference.source_kind(), SourceKind::ExplicitId);
    }

    #[test]
    fn scoped_resolvers_match_their_kind() {
        for kind in ResourceKind::ALL {
            assert_eq!(ReferenceResolver::scoped(kind).kinds(), &[kind]);
            assert_eq!(
                ReferenceResolver::scoped(kind).ambiguity_policy(),
                AmbiguityPolicy::Reject
            );
        }
    }
}

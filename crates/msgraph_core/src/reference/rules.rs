//! Per-resource string classification rules.
//!
//! Opaque ids issued by the remote API carry no type tag, so the only way to
//! tell an id from a name is its shape: mail folder ids are 104 or 120
//! characters, message ids 136 or 152, and so on. Those shapes are listed here
//! per resource kind, next to whether the kind accepts well-known folder names
//! and whether its ids are GUIDs. The id-only kinds skip shapes and take any
//! string that is not a well-known name as an id.
//!
//! # Invariants
//! - The built-in rules are constants; combined scopes are derived from them.
//! - Within one built-in kind no two shapes belong to different owners unless
//!   their lengths differ, so a single-kind scope is never ambiguous.

use std::borrow::Cow;
use std::fmt::{Display, Formatter};

/// Remote resource a reference is meant to address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResourceKind {
    MailFolder,
    Message,
    /// Message addressed together with a possible well-known folder name.
    MailMessage,
    MessageOrFolder,
    Category,
    Team,
    Attachment,
    /// Mail folder addressed by well-known name or id only, never by display name.
    MailFolderId,
    /// Message or mail folder addressed by well-known name or id only.
    MailMessageOrMailFolder,
}

impl ResourceKind {
    /// Every kind, in declaration order.
    pub const ALL: [ResourceKind; 9] = [
        Self::MailFolder,
        Self::Message,
        Self::MailMessage,
        Self::MessageOrFolder,
        Self::Category,
        Self::Team,
        Self::Attachment,
        Self::MailFolderId,
        Self::MailMessageOrMailFolder,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MailFolder => "mail_folder",
            Self::Message => "message",
            Self::MailMessage => "mail_message",
            Self::MessageOrFolder => "message_or_folder",
            Self::Category => "category",
            Self::Team => "team",
            Self::Attachment => "attachment",
            Self::MailFolderId => "mail_folder_id",
            Self::MailMessageOrMailFolder => "mail_message_or_mail_folder",
        }
    }

    /// Parses the `as_str` form.
    pub fn from_name(value: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == value.trim())
    }

    pub fn rules(self) -> ResolutionRules {
        match self {
            Self::MailFolder => MAIL_FOLDER_RULES,
            Self::Message => MESSAGE_RULES,
            Self::MailMessage => MAIL_MESSAGE_RULES,
            Self::MessageOrFolder => MESSAGE_OR_FOLDER_RULES,
            Self::Category | Self::Team => GUID_RULES,
            Self::Attachment => NAME_ONLY_RULES,
            Self::MailFolderId => MAIL_FOLDER_ID_RULES,
            Self::MailMessageOrMailFolder => MAIL_MESSAGE_OR_MAIL_FOLDER_RULES,
        }
    }
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a matched well-known folder name fills in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WellKnownMode {
    /// Name only.
    NameOnly,
    /// Name, and the same token as id (folder-style resources).
    NameAndId,
}

/// Accepted encoded-id shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdShape {
    /// Resource kind the shape belongs to.
    pub owner: ResourceKind,
    /// Exact length in characters.
    pub length: usize,
    /// Whether the id must end with a `=` padding character.
    pub padded: bool,
}

impl IdShape {
    pub const fn new(owner: ResourceKind, length: usize) -> Self {
        Self {
            owner,
            length,
            padded: false,
        }
    }

    pub const fn padded(owner: ResourceKind, length: usize) -> Self {
        Self {
            owner,
            length,
            padded: true,
        }
    }

    pub fn matches(&self, text: &str) -> bool {
        text.chars().count() == self.length && (!self.padded || text.ends_with('='))
    }
}

/// String classification rules for one scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRules {
    pub well_known: Option<WellKnownMode>,
    /// Strings are ids only when they parse as GUIDs.
    pub guid_ids: bool,
    pub id_shapes: Cow<'static, [IdShape]>,
    /// Strings matching no earlier rule are ids rather than names.
    pub id_fallback: bool,
    /// Objects contribute their name as well as their id.
    pub object_names: bool,
}

const MAIL_FOLDER_SHAPES: &[IdShape] = &[
    IdShape::new(ResourceKind::MailFolder, 104),
    IdShape::new(ResourceKind::MailFolder, 120),
];

const MESSAGE_SHAPES: &[IdShape] = &[
    IdShape::new(ResourceKind::Message, 136),
    IdShape::new(ResourceKind::Message, 152),
];

const MAIL_MESSAGE_SHAPES: &[IdShape] = &[IdShape::padded(ResourceKind::MailMessage, 152)];

const MESSAGE_OR_FOLDER_SHAPES: &[IdShape] = &[
    IdShape::new(ResourceKind::MailFolder, 104),
    IdShape::new(ResourceKind::MailFolder, 120),
    IdShape::new(ResourceKind::Message, 136),
    IdShape::new(ResourceKind::Message, 152),
];

const MAIL_FOLDER_RULES: ResolutionRules = ResolutionRules {
    well_known: Some(WellKnownMode::NameAndId),
    guid_ids: false,
    id_shapes: Cow::Borrowed(MAIL_FOLDER_SHAPES),
    id_fallback: false,
    object_names: true,
};

const MESSAGE_RULES: ResolutionRules = ResolutionRules {
    well_known: None,
    guid_ids: false,
    id_shapes: Cow::Borrowed(MESSAGE_SHAPES),
    id_fallback: false,
    object_names: true,
};

const MAIL_MESSAGE_RULES: ResolutionRules = ResolutionRules {
    well_known: Some(WellKnownMode::NameAndId),
    guid_ids: false,
    id_shapes: Cow::Borrowed(MAIL_MESSAGE_SHAPES),
    id_fallback: false,
    object_names: true,
};

const MESSAGE_OR_FOLDER_RULES: ResolutionRules = ResolutionRules {
    well_known: Some(WellKnownMode::NameOnly),
    guid_ids: false,
    id_shapes: Cow::Borrowed(MESSAGE_OR_FOLDER_SHAPES),
    id_fallback: false,
    object_names: true,
};

const GUID_RULES: ResolutionRules = ResolutionRules {
    well_known: None,
    guid_ids: true,
    id_shapes: Cow::Borrowed(&[]),
    id_fallback: false,
    object_names: true,
};

const NAME_ONLY_RULES: ResolutionRules = ResolutionRules {
    well_known: None,
    guid_ids: false,
    id_shapes: Cow::Borrowed(&[]),
    id_fallback: false,
    object_names: true,
};

const MAIL_FOLDER_ID_RULES: ResolutionRules = ResolutionRules {
    well_known: Some(WellKnownMode::NameAndId),
    guid_ids: false,
    id_shapes: Cow::Borrowed(&[]),
    id_fallback: true,
    object_names: true,
};

const MAIL_MESSAGE_OR_MAIL_FOLDER_RULES: ResolutionRules = ResolutionRules {
    well_known: Some(WellKnownMode::NameOnly),
    guid_ids: false,
    id_shapes: Cow::Borrowed(&[]),
    id_fallback: true,
    object_names: false,
};

impl ResolutionRules {
    /// Merges the rules of several kinds into one scope.
    ///
    /// Well-known names are accepted if any kind accepts them, and also fill
    /// the id only when every accepting kind does so. Shapes are concatenated
    /// in kind order with exact duplicates dropped. The id fallback applies if
    /// any kind has it; object names are kept only if every kind keeps them.
    pub fn union(kinds: &[ResourceKind]) -> Self {
        if let [single] = kinds {
            return single.rules();
        }

        let mut well_known = None;
        let mut guid_ids = false;
        let mut id_fallback = false;
        let mut object_names = true;
        let mut id_shapes: Vec<IdShape> = Vec::new();
        for rules in kinds.iter().map(|kind| kind.rules()) {
            well_known = match (well_known, rules.well_known) {
                (None, mode) | (mode, None) => mode,
                (Some(WellKnownMode::NameAndId), Some(WellKnownMode::NameAndId)) => {
                    Some(WellKnownMode::NameAndId)
                }
                _ => Some(WellKnownMode::NameOnly),
            };
            guid_ids |= rules.guid_ids;
            id_fallback |= rules.id_fallback;
            object_names &= rules.object_names;
            for shape in rules.id_shapes.iter() {
                if !id_shapes.contains(shape) {
                    id_shapes.push(*shape);
                }
            }
        }

        Self {
            well_known,
            guid_ids,
            id_shapes: Cow::Owned(id_shapes),
            id_fallback,
            object_names,
        }
    }

    /// Shapes matching `text`, in rule order.
    pub fn matching_shapes<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a IdShape> + 'a {
        self.id_shapes.iter().filter(move |shape| shape.matches(text))
    }
}

#[cfg(test)]
mod tests {
    use super::{IdShape, ResolutionRules, ResourceKind, WellKnownMode};

    #[test]
    fn padded_shape_requires_trailing_equals() {
        let shape = IdShape::padded(ResourceKind::MailMessage, 4);
        assert!(shape.matches("abc="));
        assert!(!shape.matches("abcd"));
        assert!(!shape.matches("ab="));
    }

    #[test]
    fn shape_length_counts_characters() {
        let shape = IdShape::new(ResourceKind::MailFolder, 3);
        assert!(shape.matches("äöü"));
    }

    #[test]
    fn union_merges_well_known_modes_and_shapes() {
        let rules = ResolutionRules::union(&[ResourceKind::MailFolder, ResourceKind::Message]);
        assert_eq!(rules.well_known, Some(WellKnownMode::NameAndId));
        assert_eq!(rules.id_shapes.len(), 4);
        assert!(!rules.guid_ids);

        let rules = ResolutionRules::union(&[ResourceKind::MailFolder, ResourceKind::MessageOrFolder]);
        assert_eq!(rules.well_known, Some(WellKnownMode::NameOnly));
        assert_eq!(rules.id_shapes.len(), 4);

        let rules = ResolutionRules::union(&[ResourceKind::Team, ResourceKind::Attachment]);
        assert_eq!(rules.well_known, None);
        assert!(rules.guid_ids);
        assert!(!rules.id_fallback);

        let rules = ResolutionRules::union(&[ResourceKind::Message, ResourceKind::MailMessageOrMailFolder]);
        assert!(rules.id_fallback);
        assert!(!rules.object_names);
        assert_eq!(rules.well_known, Some(WellKnownMode::NameOnly));
    }

    #[test]
    fn id_only_kinds_have_no_shapes_and_fall_back_to_ids() {
        for kind in [ResourceKind::MailFolderId, ResourceKind::MailMessageOrMailFolder] {
            let rules = kind.rules();
            assert!(rules.id_shapes.is_empty());
            assert!(rules.id_fallback);
            assert!(!rules.guid_ids);
        }
        assert_eq!(ResourceKind::MailFolderId.rules().well_known, Some(WellKnownMode::NameAndId));
        assert!(!ResourceKind::MailMessageOrMailFolder.rules().object_names);
    }

    #[test]
    fn all_lists_kinds_in_declaration_order() {
        for (index, kind) in ResourceKind::ALL.iter().enumerate() {
            assert_eq!(*kind as usize, index);
        }
    }

    #[test]
    fn single_kind_union_is_the_kind_rules() {
        for kind in ResourceKind::ALL {
            assert_eq!(ResolutionRules::union(&[kind]), kind.rules());
        }
    }

    #[test]
    fn built_in_kinds_never_match_two_owners() {
        for kind in ResourceKind::ALL {
            let rules = kind.rules();
            for shape in rules.id_shapes.iter() {
                let sample = "A".repeat(shape.length - 1) + "=";
                let mut owners: Vec<ResourceKind> =
                    rules.matching_shapes(&sample).map(|s| s.owner).collect();
                owners.dedup();
                assert_eq!(owners.len(), 1, "kind {kind} shape {shape:?}");
            }
        }
    }

    #[test]
    fn kind_names_round_trip() {
        for kind in ResourceKind::ALL {
            assert_eq!(ResourceKind::from_name(kind.as_str()), Some(kind));
        }
        assert_eq!(ResourceKind::from_name("calendar"), None);
    }
}

//! Typed reference parameters.
//!
//! # Responsibility
//! - Bind a reference to one resource kind at the type level, so a request
//!   builder taking a `FolderParameter` cannot be handed a team reference.
//! - Accept only the object inputs the remote resource admits.
//!
//! # Invariants
//! - Every parameter wraps a reference produced by the scoped resolver of its
//!   kind; string parsing follows the same rules as [`ReferenceResolver`].

use crate::model::attachment::Attachment;
use crate::model::category::OutlookCategory;
use crate::model::common::TimeZoneBase;
use crate::model::mail::{Folder, Message, WellKnownFolder};
use crate::model::mailbox_settings::{
    AutomaticRepliesSetting, LocaleInfoSetting, MailboxSettings, WorkingHoursSetting,
};
use crate::model::team::Team;
use crate::reference::error::{InvalidReason, ReferenceError, ReferenceResult};
use crate::reference::input::{MailboxSettingKind, ReferenceSource};
use crate::reference::resolver::ReferenceResolver;
use crate::reference::rules::ResourceKind;
use crate::reference::value::{Reference, SourceKind};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

macro_rules! reference_parameter {
    ($(#[$meta:meta])* $name:ident => $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name(Reference);

        impl $name {
            pub const KIND: ResourceKind = $kind;

            /// Resolves a string with this kind's rules.
            pub fn parse(text: &str) -> ReferenceResult<Self> {
                ReferenceResolver::scoped(Self::KIND).resolve(text).map(Self)
            }

            pub fn reference(&self) -> &Reference {
                &self.0
            }

            pub fn into_reference(self) -> Reference {
                self.0
            }
        }

        impl FromStr for $name {
            type Err = ReferenceError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = ReferenceError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::parse(value)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ReferenceError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                ReferenceResolver::scoped(Self::KIND).resolve(value).map(Self)
            }
        }

        impl AsRef<Reference> for $name {
            fn as_ref(&self) -> &Reference {
                &self.0
            }
        }

        impl From<$name> for Reference {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                Display::fmt(&self.0, f)
            }
        }
    };
}

macro_rules! accepts_object {
    ($name:ident: $($ty:ty),+) => {
        $(
            impl From<$ty> for $name {
                fn from(value: $ty) -> Self {
                    Self(ReferenceResolver::scoped(Self::KIND).resolve_object(value))
                }
            }
        )+
    };
}

macro_rules! accepts_well_known {
    ($($name:ident),+) => {
        $(
            impl From<WellKnownFolder> for $name {
                fn from(value: WellKnownFolder) -> Self {
                    Self(ReferenceResolver::scoped(Self::KIND).resolve_well_known(value))
                }
            }
        )+
    };
}

macro_rules! accepts_guid {
    ($($name:ident),+) => {
        $(
            impl From<Uuid> for $name {
                fn from(value: Uuid) -> Self {
                    Self(ReferenceResolver::scoped(Self::KIND).guid_reference(value))
                }
            }
        )+
    };
}

reference_parameter!(
    /// Mail folder by object, well-known name, folder id or display name.
    FolderParameter => ResourceKind::MailFolder
);
reference_parameter!(
    /// Message by object, message id or subject.
    MessageParameter => ResourceKind::Message
);
reference_parameter!(
    /// Message addressed with a padded id, or a well-known folder holding it.
    MailMessageParameter => ResourceKind::MailMessage
);
reference_parameter!(
    /// Either a message or a mail folder.
    MessageOrFolderParameter => ResourceKind::MessageOrFolder
);
reference_parameter!(
    /// Mail folder by object, well-known name or id. Any other string is
    /// taken as a folder id as it stands.
    MailFolderIdParameter => ResourceKind::MailFolderId
);
reference_parameter!(
    /// Message or mail folder by id or well-known name. Objects contribute
    /// only their id.
    MailMessageOrMailFolderParameter => ResourceKind::MailMessageOrMailFolder
);
reference_parameter!(CategoryParameter => ResourceKind::Category);
reference_parameter!(TeamParameter => ResourceKind::Team);
reference_parameter!(AttachmentParameter => ResourceKind::Attachment);

accepts_object!(FolderParameter: Folder);
accepts_object!(MessageParameter: Message);
accepts_object!(MailMessageParameter: Message);
accepts_object!(MessageOrFolderParameter: Folder, Message);
accepts_object!(MailFolderIdParameter: Folder);
accepts_object!(MailMessageOrMailFolderParameter: Folder, Message);
accepts_object!(CategoryParameter: OutlookCategory);
accepts_object!(TeamParameter: Team);
accepts_object!(AttachmentParameter: Attachment);

accepts_well_known!(
    FolderParameter,
    MailMessageParameter,
    MessageOrFolderParameter,
    MailFolderIdParameter,
    MailMessageOrMailFolderParameter
);
accepts_guid!(CategoryParameter, TeamParameter);

const SETTING_KINDS: [MailboxSettingKind; 6] = [
    MailboxSettingKind::AllSettings,
    MailboxSettingKind::AutomaticReplies,
    MailboxSettingKind::Language,
    MailboxSettingKind::WorkingHours,
    MailboxSettingKind::TimeZone,
    MailboxSettingKind::ArchiveFolder,
];

/// Mailbox setting group, addressed by its fixed setting name.
///
/// The settings DTO only selects the group; its field values are not read.
#[derive(Debug, Clone, PartialEq)]
pub struct MailboxSettingParameter {
    kind: MailboxSettingKind,
    reference: Reference,
}

impl MailboxSettingParameter {
    pub fn new(kind: MailboxSettingKind) -> Self {
        let reference = Reference::new(
            None,
            Some(kind.as_str().to_string()),
            SourceKind::WellKnownName,
            ReferenceSource::Setting(kind),
        );
        Self { kind, reference }
    }

    pub fn kind(&self) -> MailboxSettingKind {
        self.kind
    }

    pub fn reference(&self) -> &Reference {
        &self.reference
    }

    pub fn into_reference(self) -> Reference {
        self.reference
    }
}

impl FromStr for MailboxSettingParameter {
    type Err = ReferenceError;

    /// Accepts the setting-name tokens, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(InvalidReason::EmptyText.into());
        }
        SETTING_KINDS
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .map(Self::new)
            .ok_or_else(|| ReferenceError::UnknownSetting(s.trim().to_string()))
    }
}

impl From<MailboxSettingKind> for MailboxSettingParameter {
    fn from(value: MailboxSettingKind) -> Self {
        Self::new(value)
    }
}

impl From<&MailboxSettings> for MailboxSettingParameter {
    fn from(_: &MailboxSettings) -> Self {
        Self::new(MailboxSettingKind::AllSettings)
    }
}

impl From<&AutomaticRepliesSetting> for MailboxSettingParameter {
    fn from(_: &AutomaticRepliesSetting) -> Self {
        Self::new(MailboxSettingKind::AutomaticReplies)
    }
}

impl From<&LocaleInfoSetting> for MailboxSettingParameter {
    fn from(_: &LocaleInfoSetting) -> Self {
        Self::new(MailboxSettingKind::Language)
    }
}

impl From<&WorkingHoursSetting> for MailboxSettingParameter {
    fn from(_: &WorkingHoursSetting) -> Self {
        Self::new(MailboxSettingKind::WorkingHours)
    }
}

impl From<&TimeZoneBase> for MailboxSettingParameter {
    fn from(_: &TimeZoneBase) -> Self {
        Self::new(MailboxSettingKind::TimeZone)
    }
}

/// An archive folder selects the archive-folder setting.
impl From<&Folder> for MailboxSettingParameter {
    fn from(_: &Folder) -> Self {
        Self::new(MailboxSettingKind::ArchiveFolder)
    }
}

impl AsRef<Reference> for MailboxSettingParameter {
    fn as_ref(&self) -> &Reference {
        &self.reference
    }
}

impl Display for MailboxSettingParameter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.kind, f)
    }
}

#[cfg(test)]
mod tests {
    use super::{
        CategoryParameter, FolderParameter, MailMessageParameter, MailboxSettingParameter,
        MessageOrFolderParameter, TeamParameter,
    };
    use crate::model::mail::{Folder, WellKnownFolder};
    use crate::model::mailbox_settings::LocaleInfoSetting;
    use crate::reference::error::ReferenceError;
    use crate::reference::input::MailboxSettingKind;
    use crate::reference::value::SourceKind;
    use uuid::Uuid;

    #[test]
    fn folder_parameter_parses_with_folder_rules() {
        let param: FolderParameter = "Inbox".parse().expect("well-known parses");
        assert_eq!(param.reference().id(), Some("inbox"));
        assert_eq!(param.to_string(), "inbox");

        let param = FolderParameter::try_from("Project X").expect("name parses");
        assert_eq!(param.reference().source_kind(), SourceKind::FreeformName);
    }

    #[test]
    fn message_or_folder_accepts_both_objects() {
        let folder = Folder {
            id: Some("F1".to_string()),
            display_name: Some("Reports".to_string()),
            ..Folder::default()
        };
        let param = MessageOrFolderParameter::from(folder);
        assert_eq!(param.reference().source_kind(), SourceKind::ConcreteObject);
        assert_eq!(param.reference().type_name(), "Folder");

        let param = MessageOrFolderParameter::from(WellKnownFolder::Archive);
        assert_eq!(param.reference().name(), Some("archive"));
        assert_eq!(param.reference().id(), None);
    }

    #[test]
    fn mail_message_well_known_sets_id() {
        let param = MailMessageParameter::from(WellKnownFolder::Drafts);
        assert_eq!(param.reference().id(), Some("drafts"));
    }

    #[test]
    fn guid_parameters_accept_uuid_values() {
        let id = Uuid::new_v4();
        let category = CategoryParameter::from(id);
        let team = TeamParameter::from(id);
        assert_eq!(category.reference().id(), team.reference().id());
        assert_eq!(team.reference().source_kind(), SourceKind::ExplicitId);
    }

    #[test]
    fn empty_string_is_rejected_by_every_parameter() {
        assert!(matches!(
            "".parse::<FolderParameter>(),
            Err(ReferenceError::InvalidReference(_))
        ));
        assert!(matches!(
            TeamParameter::try_from(String::new()),
            Err(ReferenceError::InvalidReference(_))
        ));
    }

    #[test]
    fn mailbox_setting_maps_dto_to_token() {
        let param = MailboxSettingParameter::from(&LocaleInfoSetting::new("de-DE", "German"));
        assert_eq!(param.kind(), MailboxSettingKind::Language);
        assert_eq!(param.reference().name(), Some("LanguageSetting"));
        assert_eq!(param.reference().source_kind(), SourceKind::WellKnownName);
        assert_eq!(param.reference().lookup_key(), Some("LanguageSetting"));

        let parsed: MailboxSettingParameter = "timezonesetting".parse().expect("token parses");
        assert_eq!(parsed.kind(), MailboxSettingKind::TimeZone);
        assert!(matches!(
            "Calendar".parse::<MailboxSettingParameter>(),
            Err(ReferenceError::UnknownSetting(_))
        ));
    }
}

//! Input shapes accepted by the resolver.

use crate::model::attachment::Attachment;
use crate::model::category::OutlookCategory;
use crate::model::mail::{Folder, Message, WellKnownFolder};
use crate::model::team::{Team, TeamChannel};
use crate::model::user::User;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Capability shared by every resource that can be addressed directly.
pub trait Addressable {
    /// Identifier in its wire form.
    fn reference_id(&self) -> Option<String>;
    /// Human-facing name: display name, subject or file name.
    fn reference_name(&self) -> Option<&str>;
    /// Short type label used for diagnostics.
    fn type_name(&self) -> &'static str;
}

impl Addressable for Folder {
    fn reference_id(&self) -> Option<String> {
        self.id.clone()
    }

    fn reference_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    fn type_name(&self) -> &'static str {
        "Folder"
    }
}

impl Addressable for Message {
    fn reference_id(&self) -> Option<String> {
        self.id.clone()
    }

    fn reference_name(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    fn type_name(&self) -> &'static str {
        "Message"
    }
}

impl Addressable for OutlookCategory {
    fn reference_id(&self) -> Option<String> {
        self.id.map(|id| id.hyphenated().to_string())
    }

    fn reference_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    fn type_name(&self) -> &'static str {
        "OutlookCategory"
    }
}

impl Addressable for Team {
    fn reference_id(&self) -> Option<String> {
        self.id.clone()
    }

    fn reference_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    fn type_name(&self) -> &'static str {
        "Team"
    }
}

impl Addressable for TeamChannel {
    fn reference_id(&self) -> Option<String> {
        self.id.clone()
    }

    fn reference_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    fn type_name(&self) -> &'static str {
        "TeamChannel"
    }
}

impl Addressable for Attachment {
    fn reference_id(&self) -> Option<String> {
        self.id.clone()
    }

    fn reference_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn type_name(&self) -> &'static str {
        self.attachment_type().type_name()
    }
}

impl Addressable for User {
    fn reference_id(&self) -> Option<String> {
        self.id.clone()
    }

    fn reference_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    fn type_name(&self) -> &'static str {
        "User"
    }
}

/// A concrete resource handed to the resolver.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceObject {
    Folder(Folder),
    Message(Box<Message>),
    Category(OutlookCategory),
    Team(Box<Team>),
    Channel(TeamChannel),
    Attachment(Box<Attachment>),
    User(Box<User>),
}

impl ResourceObject {
    fn as_addressable(&self) -> &dyn Addressable {
        match self {
            Self::Folder(folder) => folder,
            Self::Message(message) => message.as_ref(),
            Self::Category(category) => category,
            Self::Team(team) => team.as_ref(),
            Self::Channel(channel) => channel,
            Self::Attachment(attachment) => attachment.as_ref(),
            Self::User(user) => user.as_ref(),
        }
    }
}

impl Addressable for ResourceObject {
    fn reference_id(&self) -> Option<String> {
        self.as_addressable().reference_id()
    }

    fn reference_name(&self) -> Option<&str> {
        self.as_addressable().reference_name()
    }

    fn type_name(&self) -> &'static str {
        self.as_addressable().type_name()
    }
}

impl Display for ResourceObject {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Folder(folder) => Display::fmt(folder, f),
            Self::Message(message) => Display::fmt(message, f),
            Self::Category(category) => Display::fmt(category, f),
            Self::Team(team) => Display::fmt(team, f),
            Self::Channel(channel) => Display::fmt(channel, f),
            Self::Attachment(attachment) => Display::fmt(attachment, f),
            Self::User(user) => Display::fmt(user, f),
        }
    }
}

impl From<Folder> for ResourceObject {
    fn from(value: Folder) -> Self {
        Self::Folder(value)
    }
}

impl From<Message> for ResourceObject {
    fn from(value: Message) -> Self {
        Self::Message(Box::new(value))
    }
}

impl From<OutlookCategory> for ResourceObject {
    fn from(value: OutlookCategory) -> Self {
        Self::Category(value)
    }
}

impl From<Team> for ResourceObject {
    fn from(value: Team) -> Self {
        Self::Team(Box::new(value))
    }
}

impl From<TeamChannel> for ResourceObject {
    fn from(value: TeamChannel) -> Self {
        Self::Channel(value)
    }
}

impl From<Attachment> for ResourceObject {
    fn from(value: Attachment) -> Self {
        Self::Attachment(Box::new(value))
    }
}

impl From<User> for ResourceObject {
    fn from(value: User) -> Self {
        Self::User(Box::new(value))
    }
}

/// Mailbox setting group addressed by a fixed setting name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MailboxSettingKind {
    AllSettings,
    AutomaticReplies,
    Language,
    WorkingHours,
    TimeZone,
    ArchiveFolder,
}

impl MailboxSettingKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AllSettings => "AllSettings",
            Self::AutomaticReplies => "AutomaticReplySetting",
            Self::Language => "LanguageSetting",
            Self::WorkingHours => "WorkingHoursSetting",
            Self::TimeZone => "TimeZoneSetting",
            Self::ArchiveFolder => "ArchiveFolderSetting",
        }
    }
}

impl Display for MailboxSettingKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller input before resolution.
///
/// `Missing` stands in for an absent object (`None`) and is always rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum ReferenceInput {
    Missing,
    Object(ResourceObject),
    Text(String),
    WellKnown(WellKnownFolder),
    Guid(Uuid),
}

impl From<ResourceObject> for ReferenceInput {
    fn from(value: ResourceObject) -> Self {
        Self::Object(value)
    }
}

impl From<String> for ReferenceInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for ReferenceInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<WellKnownFolder> for ReferenceInput {
    fn from(value: WellKnownFolder) -> Self {
        Self::WellKnown(value)
    }
}

impl From<Uuid> for ReferenceInput {
    fn from(value: Uuid) -> Self {
        Self::Guid(value)
    }
}

impl From<Folder> for ReferenceInput {
    fn from(value: Folder) -> Self {
        Self::Object(value.into())
    }
}

impl From<Message> for ReferenceInput {
    fn from(value: Message) -> Self {
        Self::Object(value.into())
    }
}

impl From<OutlookCategory> for ReferenceInput {
    fn from(value: OutlookCategory) -> Self {
        Self::Object(value.into())
    }
}

impl From<Team> for ReferenceInput {
    fn from(value: Team) -> Self {
        Self::Object(value.into())
    }
}

impl From<TeamChannel> for ReferenceInput {
    fn from(value: TeamChannel) -> Self {
        Self::Object(value.into())
    }
}

impl From<Attachment> for ReferenceInput {
    fn from(value: Attachment) -> Self {
        Self::Object(value.into())
    }
}

impl From<User> for ReferenceInput {
    fn from(value: User) -> Self {
        Self::Object(value.into())
    }
}

impl<T: Into<ReferenceInput>> From<Option<T>> for ReferenceInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

/// Input retained by a resolved reference.
#[derive(Debug, Clone, PartialEq)]
pub enum ReferenceSource {
    Object(ResourceObject),
    Text(String),
    WellKnown(WellKnownFolder),
    Guid(Uuid),
    Setting(MailboxSettingKind),
}

impl ReferenceSource {
    /// Type label of the original input.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Object(object) => object.type_name(),
            Self::Text(_) => "String",
            Self::WellKnown(_) => "WellKnownFolder",
            Self::Guid(_) => "Guid",
            Self::Setting(_) => "MailboxSetting",
        }
    }
}

impl Display for ReferenceSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Object(object) => Display::fmt(object, f),
            Self::Text(text) => f.write_str(text),
            Self::WellKnown(folder) => Display::fmt(folder, f),
            Self::Guid(id) => Display::fmt(&id.hyphenated(), f),
            Self::Setting(kind) => Display::fmt(kind, f),
        }
    }
}

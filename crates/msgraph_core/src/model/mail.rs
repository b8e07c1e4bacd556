//! Mail resources: messages, bodies, recipients, folders and the
//! well-known folder names.
//!
//! # Invariants
//! - Derived values (`name`, `unread_in_percent`) are computed on every read.
//! - Well-known folder names compare case-insensitively and render lower-cased.

use crate::model::common::{round2, FollowupFlag};
use crate::model::error::ModelError;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

// Leading `<html>` or trailing `</html>` marks a body as HTML.
static HTML_BODY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)^\s*<html>|</html>\s*$").expect("valid html body regex"));

/// Reserved mail folder names usable in place of a folder id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WellKnownFolder {
    /// Every folder in the mailbox.
    AllItems,
    /// One-click archive target (not the archive mailbox).
    Archive,
    Clutter,
    Conflicts,
    /// Where Skype stores IM conversations.
    ConversationHistory,
    DeletedItems,
    Drafts,
    Inbox,
    JunkEmail,
    LocalFailures,
    /// "Top of Information Store", parent of the visible folders.
    MsgFolderRoot,
    Outbox,
    /// Soft-deleted items.
    RecoverableItemsDeletions,
    Scheduled,
    SearchFolders,
    SentItems,
    ServerFailures,
    SyncIssues,
}

impl WellKnownFolder {
    /// Every member of the closed set.
    pub const ALL: [WellKnownFolder; 18] = [
        Self::AllItems,
        Self::Archive,
        Self::Clutter,
        Self::Conflicts,
        Self::ConversationHistory,
        Self::DeletedItems,
        Self::Drafts,
        Self::Inbox,
        Self::JunkEmail,
        Self::LocalFailures,
        Self::MsgFolderRoot,
        Self::Outbox,
        Self::RecoverableItemsDeletions,
        Self::Scheduled,
        Self::SearchFolders,
        Self::SentItems,
        Self::ServerFailures,
        Self::SyncIssues,
    ];

    /// Lower-cased token sent to the remote API.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AllItems => "allitems",
            Self::Archive => "archive",
            Self::Clutter => "clutter",
            Self::Conflicts => "conflicts",
            Self::ConversationHistory => "conversationhistory",
            Self::DeletedItems => "deleteditems",
            Self::Drafts => "drafts",
            Self::Inbox => "inbox",
            Self::JunkEmail => "junkemail",
            Self::LocalFailures => "localfailures",
            Self::MsgFolderRoot => "msgfolderroot",
            Self::Outbox => "outbox",
            Self::RecoverableItemsDeletions => "recoverableitemsdeletions",
            Self::Scheduled => "scheduled",
            Self::SearchFolders => "searchfolders",
            Self::SentItems => "sentitems",
            Self::ServerFailures => "serverfailures",
            Self::SyncIssues => "syncissues",
        }
    }

    /// Case-insensitive membership test against the closed set.
    pub fn from_name(value: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|folder| folder.as_str().eq_ignore_ascii_case(value))
    }
}

impl FromStr for WellKnownFolder {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_name(value).ok_or_else(|| ModelError::UnknownWellKnownFolder(value.to_string()))
    }
}

impl Display for WellKnownFolder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mailbox address with an optional display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailAddress {
    pub address: String,
    pub name: Option<String>,
}

impl Display for EmailAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.name.as_deref().filter(|name| !name.is_empty()) {
            Some(name) => write!(f, "{name} <{}>", self.address),
            None => f.write_str(&self.address),
        }
    }
}

/// Envelope wrapper the API uses for every sender/recipient field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    pub email_address: EmailAddress,
}

impl Recipient {
    pub fn new(address: impl Into<String>, name: Option<String>) -> Self {
        Self {
            email_address: EmailAddress {
                address: address.into(),
                name,
            },
        }
    }
}

impl Display for Recipient {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.email_address, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyType {
    Text,
    Html,
}

impl FromStr for BodyType {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "html" => Ok(Self::Html),
            _ => Err(ModelError::UnknownBodyType(value.to_string())),
        }
    }
}

/// Message or reply body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageBody {
    pub content_type: BodyType,
    pub content: String,
}

impl MessageBody {
    /// Builds a body, tagging it `html` when the content looks like an HTML
    /// document and `text` otherwise.
    pub fn from_content(content: impl Into<String>) -> Self {
        let content = content.into();
        let content_type = if HTML_BODY_RE.is_match(&content) {
            BodyType::Html
        } else {
            BodyType::Text
        };
        Self {
            content_type,
            content,
        }
    }

    pub fn is_html(&self) -> bool {
        self.content_type == BodyType::Html
    }
}

impl Display for MessageBody {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.content)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Low,
    Normal,
    High,
}

/// Mail message as returned by the messages endpoints.
///
/// `user` is not part of the wire shape; it records which mailbox the message
/// was read from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Option<String>,
    pub subject: Option<String>,
    pub body_preview: Option<String>,
    pub body: Option<MessageBody>,
    pub from: Option<Recipient>,
    pub sender: Option<Recipient>,
    #[serde(default)]
    pub to_recipients: Vec<Recipient>,
    #[serde(default)]
    pub cc_recipients: Vec<Recipient>,
    #[serde(default)]
    pub bcc_recipients: Vec<Recipient>,
    #[serde(default)]
    pub reply_to: Vec<Recipient>,
    pub created_date_time: Option<DateTime<Utc>>,
    pub last_modified_date_time: Option<DateTime<Utc>>,
    pub received_date_time: Option<DateTime<Utc>>,
    pub sent_date_time: Option<DateTime<Utc>>,
    pub is_read: Option<bool>,
    pub is_draft: Option<bool>,
    pub is_read_receipt_requested: Option<bool>,
    pub is_delivery_receipt_requested: Option<bool>,
    pub has_attachments: Option<bool>,
    pub importance: Option<Importance>,
    #[serde(default)]
    pub categories: Vec<String>,
    pub flag: Option<FollowupFlag>,
    pub parent_folder_id: Option<String>,
    pub conversation_id: Option<String>,
    pub internet_message_id: Option<String>,
    pub web_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl Message {
    /// Alias of `subject`; messages have no separate display name.
    pub fn name(&self) -> Option<&str> {
        self.subject.as_deref()
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(first_non_empty(&[self.subject.as_deref(), self.id.as_deref()]).unwrap_or("Message"))
    }
}

/// Mail folder with its item counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub parent_folder_id: Option<String>,
    #[serde(default)]
    pub child_folder_count: u32,
    #[serde(default)]
    pub unread_item_count: u32,
    #[serde(default)]
    pub total_item_count: u32,
    /// Depth below the folder the listing started from; filled in by callers
    /// walking the hierarchy.
    #[serde(default)]
    pub hierarchy_level: u32,
    #[serde(skip)]
    pub parent_folder: Option<Box<Folder>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl Folder {
    pub fn name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Share of unread items in percent, two decimals; `0.0` for an empty folder.
    pub fn unread_in_percent(&self) -> f64 {
        if self.total_item_count == 0 {
            return 0.0;
        }
        round2(f64::from(self.unread_item_count) / f64::from(self.total_item_count) * 100.0)
    }
}

impl Display for Folder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(
            first_non_empty(&[self.display_name.as_deref(), self.id.as_deref()]).unwrap_or("Folder"),
        )
    }
}

/// First candidate that is present and not empty.
pub(crate) fn first_non_empty<'a>(candidates: &[Option<&'a str>]) -> Option<&'a str> {
    candidates
        .iter()
        .flatten()
        .copied()
        .find(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{BodyType, Folder, Message, MessageBody, WellKnownFolder};

    #[test]
    fn well_known_lookup_ignores_case() {
        assert_eq!(WellKnownFolder::from_name("INBOX"), Some(WellKnownFolder::Inbox));
        assert_eq!(
            WellKnownFolder::from_name("SentItems"),
            Some(WellKnownFolder::SentItems)
        );
        assert_eq!(WellKnownFolder::from_name("sent items"), None);
        assert!("nope".parse::<WellKnownFolder>().is_err());
    }

    #[test]
    fn well_known_tokens_are_lowercase_and_unique() {
        let mut tokens: Vec<&str> = WellKnownFolder::ALL.iter().map(|f| f.as_str()).collect();
        assert!(tokens.iter().all(|t| *t == t.to_ascii_lowercase()));
        tokens.sort_unstable();
        tokens.dedup();
        assert_eq!(tokens.len(), WellKnownFolder::ALL.len());
    }

    #[test]
    fn body_sniffs_html_documents() {
        assert!(MessageBody::from_content("<HTML><body>hi</body></HTML>").is_html());
        assert!(MessageBody::from_content("<p>x</p>\n</html>\n").is_html());
        let text = MessageBody::from_content("plain <b>bold</b> text");
        assert_eq!(text.content_type, BodyType::Text);
        assert_eq!(text.to_string(), "plain <b>bold</b> text");
    }

    #[test]
    fn unread_percentage_is_rounded_and_safe_for_empty_folders() {
        let mut folder = Folder {
            unread_item_count: 1,
            total_item_count: 3,
            ..Folder::default()
        };
        assert_eq!(folder.unread_in_percent(), 33.33);

        folder.total_item_count = 0;
        assert_eq!(folder.unread_in_percent(), 0.0);
    }

    #[test]
    fn display_falls_back_from_name_to_id_to_type() {
        let mut folder = Folder::default();
        assert_eq!(folder.to_string(), "Folder");
        folder.id = Some("AAMkADZ".to_string());
        assert_eq!(folder.to_string(), "AAMkADZ");
        folder.display_name = Some("Projects".to_string());
        assert_eq!(folder.to_string(), "Projects");

        let message = Message {
            subject: Some(String::new()),
            id: Some("msg-1".to_string()),
            ..Message::default()
        };
        assert_eq!(message.to_string(), "msg-1");
    }
}

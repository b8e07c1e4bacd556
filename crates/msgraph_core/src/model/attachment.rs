//! Message attachments.
//!
//! The remote API returns three attachment shapes distinguished by the
//! `@odata.type` discriminator. Shared fields live on [`Attachment`], the
//! shape-specific ones in [`AttachmentDetails`].

use crate::model::common::round2;
use crate::model::mail::first_non_empty;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

const BYTES_PER_KB: f64 = 1024.0;

/// Attachment shape, as named by the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentType {
    File,
    Item,
    Reference,
}

impl AttachmentType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::File => "fileAttachment",
            Self::Item => "itemAttachment",
            Self::Reference => "referenceAttachment",
        }
    }

    /// Type label used when an attachment has neither name nor id.
    pub fn type_name(self) -> &'static str {
        match self {
            Self::File => "FileAttachment",
            Self::Item => "ItemAttachment",
            Self::Reference => "ReferenceAttachment",
        }
    }
}

impl Display for AttachmentType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReferenceAttachmentProvider {
    OneDriveBusiness,
    OneDriveConsumer,
    Dropbox,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReferenceAttachmentPermission {
    View,
    Edit,
    AnonymousView,
    AnonymousEdit,
    OrganizationView,
    OrganizationEdit,
    Other,
}

/// Inline file content, base64-encoded on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileAttachmentDetails {
    pub content_id: Option<String>,
    pub content_location: Option<String>,
    pub content_bytes: Option<String>,
}

impl FileAttachmentDetails {
    pub fn with_content(bytes: &[u8]) -> Self {
        Self {
            content_bytes: Some(STANDARD.encode(bytes)),
            ..Self::default()
        }
    }

    /// Decodes `content_bytes`; `Ok(None)` when no content was returned.
    pub fn decode_content(&self) -> Result<Option<Vec<u8>>, base64::DecodeError> {
        self.content_bytes
            .as_deref()
            .map(|encoded| STANDARD.decode(encoded))
            .transpose()
    }
}

/// Link to a file stored in a cloud drive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceAttachmentDetails {
    pub source_url: Option<String>,
    pub provider_type: Option<ReferenceAttachmentProvider>,
    pub thumbnail_url: Option<String>,
    pub preview_url: Option<String>,
    pub permission: Option<ReferenceAttachmentPermission>,
    pub is_folder: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "@odata.type")]
pub enum AttachmentDetails {
    #[serde(rename = "#microsoft.graph.fileAttachment")]
    File(FileAttachmentDetails),
    /// Embedded message, event or contact; its payload is fetched separately.
    #[serde(rename = "#microsoft.graph.itemAttachment")]
    Item,
    #[serde(rename = "#microsoft.graph.referenceAttachment")]
    Reference(ReferenceAttachmentDetails),
}

/// Attachment of a mail message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: Option<String>,
    pub name: Option<String>,
    pub content_type: Option<String>,
    #[serde(default)]
    pub is_inline: bool,
    pub last_modified_date_time: Option<DateTime<Utc>>,
    /// Size in bytes.
    #[serde(default)]
    pub size: u32,
    #[serde(flatten)]
    pub details: AttachmentDetails,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl Attachment {
    /// Creates an attachment with only the shape set.
    pub fn new(details: AttachmentDetails) -> Self {
        Self {
            id: None,
            name: None,
            content_type: None,
            is_inline: false,
            last_modified_date_time: None,
            size: 0,
            details,
            user: None,
        }
    }

    /// Alias of `name`.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn attachment_type(&self) -> AttachmentType {
        match self.details {
            AttachmentDetails::File(_) => AttachmentType::File,
            AttachmentDetails::Item => AttachmentType::Item,
            AttachmentDetails::Reference(_) => AttachmentType::Reference,
        }
    }

    pub fn size_kb(&self) -> f64 {
        round2(f64::from(self.size) / BYTES_PER_KB)
    }

    pub fn size_mb(&self) -> f64 {
        round2(f64::from(self.size) / BYTES_PER_KB / BYTES_PER_KB)
    }

    pub fn file_details(&self) -> Option<&FileAttachmentDetails> {
        match &self.details {
            AttachmentDetails::File(details) => Some(details),
            _ => None,
        }
    }

    pub fn reference_details(&self) -> Option<&ReferenceAttachmentDetails> {
        match &self.details {
            AttachmentDetails::Reference(details) => Some(details),
            _ => None,
        }
    }
}

impl Display for Attachment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(
            first_non_empty(&[self.name.as_deref(), self.id.as_deref()])
                .unwrap_or_else(|| self.attachment_type().type_name()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Attachment, AttachmentDetails, AttachmentType, FileAttachmentDetails};

    #[test]
    fn size_conversions_round_to_two_decimals() {
        let mut attachment = Attachment::new(AttachmentDetails::Item);
        attachment.size = 1536;
        assert_eq!(attachment.size_kb(), 1.5);
        assert_eq!(attachment.size_mb(), 0.0);

        attachment.size = 5 * 1024 * 1024 + 300 * 1024;
        assert_eq!(attachment.size_mb(), 5.29);
    }

    #[test]
    fn file_content_decodes_from_base64() {
        let details = FileAttachmentDetails::with_content(b"quarterly numbers");
        assert_eq!(
            details.decode_content().expect("valid base64"),
            Some(b"quarterly numbers".to_vec())
        );
        assert_eq!(FileAttachmentDetails::default().decode_content(), Ok(None));

        let broken = FileAttachmentDetails {
            content_bytes: Some("***".to_string()),
            ..FileAttachmentDetails::default()
        };
        assert!(broken.decode_content().is_err());
    }

    #[test]
    fn display_falls_back_to_type_name() {
        let mut attachment = Attachment::new(AttachmentDetails::File(FileAttachmentDetails::default()));
        assert_eq!(attachment.attachment_type(), AttachmentType::File);
        assert_eq!(attachment.to_string(), "FileAttachment");
        attachment.name = Some("report.pdf".to_string());
        assert_eq!(attachment.to_string(), "report.pdf");
        assert_eq!(attachment.display_name(), Some("report.pdf"));
    }
}

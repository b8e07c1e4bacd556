//! Mailbox settings: automatic replies, locale, working hours.

use crate::model::common::{DateTimeTimeZone, TimeZoneBase};
use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AutomaticRepliesStatus {
    #[default]
    Disabled,
    AlwaysEnabled,
    Scheduled,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExternalAudienceScope {
    #[default]
    None,
    ContactsOnly,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sunday => "sunday",
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
        }
    }
}

impl Display for DayOfWeek {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomaticRepliesSetting {
    #[serde(default)]
    pub status: AutomaticRepliesStatus,
    #[serde(default)]
    pub external_audience: ExternalAudienceScope,
    pub external_reply_message: Option<String>,
    pub internal_reply_message: Option<String>,
    pub scheduled_start_date_time: Option<DateTimeTimeZone>,
    pub scheduled_end_date_time: Option<DateTimeTimeZone>,
}

impl AutomaticRepliesSetting {
    pub fn external_reply_message_is_present(&self) -> bool {
        is_present(self.external_reply_message.as_deref())
    }

    pub fn internal_reply_message_is_present(&self) -> bool {
        is_present(self.internal_reply_message.as_deref())
    }

    /// Scheduled start as an instant; `None` unless it is expressed in UTC.
    pub fn scheduled_start_utc(&self) -> Option<DateTime<Utc>> {
        self.scheduled_start_date_time.as_ref()?.utc()
    }

    pub fn scheduled_end_utc(&self) -> Option<DateTime<Utc>> {
        self.scheduled_end_date_time.as_ref()?.utc()
    }
}

fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|text| !text.trim().is_empty())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleInfoSetting {
    /// Culture code such as `en-US`.
    pub locale: Option<String>,
    pub display_name: Option<String>,
}

impl LocaleInfoSetting {
    pub fn new(locale: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            locale: Some(locale.into()),
            display_name: Some(display_name.into()),
        }
    }
}

impl Display for LocaleInfoSetting {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(
            self.display_name
                .as_deref()
                .or(self.locale.as_deref())
                .unwrap_or_default(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingHoursSetting {
    #[serde(default)]
    pub days_of_week: Vec<DayOfWeek>,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub time_zone: Option<TimeZoneBase>,
}

impl Display for WorkingHoursSetting {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let days = self
            .days_of_week
            .iter()
            .map(|day| day.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "{days} ({}-{})",
            self.start_time.format("%H:%M:%S"),
            self.end_time.format("%H:%M:%S")
        )
    }
}

/// The full settings document of one mailbox.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MailboxSettings {
    /// Id of the folder used as archive target.
    pub archive_folder: Option<String>,
    pub time_zone: Option<String>,
    pub automatic_replies_setting: Option<AutomaticRepliesSetting>,
    pub language: Option<LocaleInfoSetting>,
    pub working_hours: Option<WorkingHoursSetting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl Display for MailboxSettings {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.user.as_deref() {
            Some(user) => write!(f, "MailboxSettings({user})"),
            None => f.write_str("MailboxSettings"),
        }
    }
}

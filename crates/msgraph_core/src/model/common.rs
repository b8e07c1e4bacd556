//! Value types shared by mail, settings and team resources.

use crate::model::error::ModelError;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Zone label the remote API uses for UTC timestamps.
pub const UTC_TIME_ZONE: &str = "UTC";

/// Rounds to two decimal places, the precision every derived ratio uses.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Wall-clock timestamp paired with the name of its time zone.
///
/// The remote API never sends an offset; the zone is an opaque Windows or
/// IANA name such as `Pacific Standard Time` or `UTC`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateTimeTimeZone {
    pub date_time: NaiveDateTime,
    pub time_zone: String,
}

impl DateTimeTimeZone {
    pub fn new(date_time: NaiveDateTime, time_zone: impl Into<String>) -> Self {
        Self {
            date_time,
            time_zone: time_zone.into(),
        }
    }

    /// Wraps a UTC instant, labelling it with the `UTC` zone.
    pub fn from_utc(instant: DateTime<Utc>) -> Self {
        Self::new(instant.naive_utc(), UTC_TIME_ZONE)
    }

    /// Returns the instant when the zone is `UTC`, `None` for any other zone.
    pub fn utc(&self) -> Option<DateTime<Utc>> {
        if self.time_zone.eq_ignore_ascii_case(UTC_TIME_ZONE) {
            Some(Utc.from_utc_datetime(&self.date_time))
        } else {
            None
        }
    }
}

impl Display for DateTimeTimeZone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({})",
            self.date_time.format("%Y-%m-%d %H:%M:%S"),
            self.time_zone
        )
    }
}

/// Follow-up state of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FlagStatus {
    NotFlagged,
    Complete,
    Flagged,
}

impl FlagStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotFlagged => "notFlagged",
            Self::Complete => "complete",
            Self::Flagged => "flagged",
        }
    }
}

impl FromStr for FlagStatus {
    type Err = ModelError;

    /// Case-insensitive; anything outside the three states is rejected.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "notflagged" => Ok(Self::NotFlagged),
            "complete" => Ok(Self::Complete),
            "flagged" => Ok(Self::Flagged),
            _ => Err(ModelError::UnknownFlagStatus(value.to_string())),
        }
    }
}

impl Display for FlagStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Follow-up flag attached to a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowupFlag {
    pub flag_status: FlagStatus,
    #[serde(default)]
    pub completed_date_time: Option<DateTimeTimeZone>,
    #[serde(default)]
    pub due_date_time: Option<DateTimeTimeZone>,
    #[serde(default)]
    pub start_date_time: Option<DateTimeTimeZone>,
}

impl FollowupFlag {
    pub fn new(flag_status: FlagStatus) -> Self {
        Self {
            flag_status,
            completed_date_time: None,
            due_date_time: None,
            start_date_time: None,
        }
    }

    pub fn is_flagged(&self) -> bool {
        self.flag_status == FlagStatus::Flagged
    }
}

impl FromStr for FollowupFlag {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value.parse::<FlagStatus>().map(Self::new)
    }
}

impl Display for FollowupFlag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.flag_status, f)
    }
}

/// Named time zone as carried by working-hours settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeZoneBase {
    pub name: String,
}

impl TimeZoneBase {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Display for TimeZoneBase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

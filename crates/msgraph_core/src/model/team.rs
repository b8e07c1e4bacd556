//! Teams, channels and team-level settings.

use crate::model::mail::first_non_empty;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberSettings {
    pub allow_create_update_channels: bool,
    pub allow_delete_channels: bool,
    pub allow_add_remove_apps: bool,
    pub allow_create_update_remove_tabs: bool,
    pub allow_create_update_remove_connectors: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamGuestSettings {
    pub allow_create_update_channels: bool,
    pub allow_delete_channels: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMessagingSettings {
    pub allow_user_edit_messages: bool,
    pub allow_user_delete_messages: bool,
    pub allow_owner_delete_messages: bool,
    pub allow_team_mentions: bool,
    pub allow_channel_mentions: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GiphyContentRating {
    #[default]
    Moderate,
    Strict,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamFunSettings {
    pub allow_giphy: bool,
    pub giphy_content_rating: GiphyContentRating,
    pub allow_stickers_and_memes: bool,
    pub allow_custom_memes: bool,
}

/// A team the user can see.
///
/// Teams listed through `joinedTeams` carry fewer fields than those read
/// directly; `info_from_joined_team` records which source filled the record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: Option<String>,
    pub internal_id: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub is_archived: bool,
    pub web_url: Option<String>,
    pub member_settings: Option<TeamMemberSettings>,
    pub guest_settings: Option<TeamGuestSettings>,
    pub messaging_settings: Option<TeamMessagingSettings>,
    pub fun_settings: Option<TeamFunSettings>,
    #[serde(default, skip_serializing)]
    pub info_from_joined_team: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl Team {
    pub fn name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Only teams the caller can open report an internal id.
    pub fn accessible(&self) -> bool {
        self.internal_id
            .as_deref()
            .is_some_and(|value| !value.is_empty())
    }
}

impl Display for Team {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(first_non_empty(&[self.display_name.as_deref(), self.id.as_deref()]).unwrap_or("Team"))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamChannel {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub is_favorite_by_default: bool,
    pub web_url: Option<String>,
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl TeamChannel {
    pub fn name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }
}

impl Display for TeamChannel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(
            first_non_empty(&[self.display_name.as_deref(), self.id.as_deref()]).unwrap_or("TeamChannel"),
        )
    }
}

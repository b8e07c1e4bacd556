//! Directory user profile.

use crate::model::mail::first_non_empty;
use crate::model::mailbox_settings::MailboxSettings;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Licence assigned to a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedLicense {
    pub sku_id: Option<String>,
    #[serde(default)]
    pub disabled_plans: Vec<String>,
}

/// Profile of a directory user. Only `id` is guaranteed to be returned;
/// everything else depends on the `$select` the request used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub given_name: Option<String>,
    pub surname: Option<String>,
    pub preferred_name: Option<String>,
    pub user_principal_name: Option<String>,
    pub mail: Option<String>,
    pub mail_nickname: Option<String>,
    #[serde(default)]
    pub other_mails: Vec<String>,
    #[serde(default)]
    pub proxy_addresses: Vec<String>,
    #[serde(default)]
    pub im_addresses: Vec<String>,
    pub about_me: Option<String>,
    pub account_enabled: Option<bool>,
    pub age_group: Option<String>,
    pub consent_provided_for_minor: Option<String>,
    pub legal_age_group_classification: Option<String>,
    #[serde(default)]
    pub assigned_licenses: Vec<AssignedLicense>,
    pub birthday: Option<DateTime<Utc>>,
    pub hire_date: Option<DateTime<Utc>>,
    pub created_date_time: Option<DateTime<Utc>>,
    pub deleted_date_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub business_phones: Vec<String>,
    pub mobile_phone: Option<String>,
    pub fax_number: Option<String>,
    pub street_address: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub usage_location: Option<String>,
    pub office_location: Option<String>,
    pub company_name: Option<String>,
    pub department: Option<String>,
    pub job_title: Option<String>,
    pub employee_id: Option<String>,
    pub user_type: Option<String>,
    pub external_user_state: Option<String>,
    pub external_user_state_change_date_time: Option<DateTime<Utc>>,
    pub is_resource_account: Option<bool>,
    pub show_in_address_list: Option<bool>,
    pub my_site: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub past_projects: Vec<String>,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub schools: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub preferred_language: Option<String>,
    pub preferred_data_location: Option<String>,
    pub password_policies: Option<String>,
    pub mailbox_settings: Option<MailboxSettings>,
    pub on_premises_distinguished_name: Option<String>,
    pub on_premises_domain_name: Option<String>,
    pub on_premises_immutable_id: Option<String>,
    pub on_premises_last_sync_date_time: Option<DateTime<Utc>>,
    pub on_premises_sam_account_name: Option<String>,
    pub on_premises_security_identifier: Option<String>,
    pub on_premises_sync_enabled: Option<bool>,
    pub on_premises_user_principal_name: Option<String>,
    pub refresh_tokens_valid_from_date_time: Option<DateTime<Utc>>,
    pub sign_in_sessions_valid_from_date_time: Option<DateTime<Utc>>,
}

impl User {
    pub fn name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }
}

impl Display for User {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(first_non_empty(&[self.display_name.as_deref(), self.id.as_deref()]).unwrap_or("User"))
    }
}

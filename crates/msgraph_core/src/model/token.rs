//! Access token record and the claims decoded from it.
//!
//! Obtaining and decoding tokens happens elsewhere; these types only hold the
//! result and answer validity questions against a caller-supplied clock.
//!
//! # Invariants
//! - Token secrets are never serialized and never printed by `Debug`.
//! - Time-based accessors take `now` explicitly; the `*_now` variants read the
//!   system clock.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};
use uuid::Uuid;

const BEARER_TOKEN_TYPE: &str = "bearer";

/// Opaque token string with a redacted `Debug`.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SecretToken(String);

impl SecretToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl Debug for SecretToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecretToken(len={})", self.0.len())
    }
}

/// Parts and claims of a JWT access token, already decoded by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JwtAccessTokenInfo {
    pub header: String,
    pub payload: String,
    #[serde(default)]
    pub signature: Vec<u8>,
    /// `name` claim.
    pub name: Option<String>,
    /// `upn` claim.
    pub upn: Option<String>,
    /// `tid` claim.
    pub tenant_id: Option<Uuid>,
    /// `app_displayname` claim.
    pub application_name: Option<String>,
}

/// Access token issued for the remote API together with its metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureAccessToken {
    pub token_type: String,
    pub resource: Option<String>,
    pub app_redirect_url: Option<String>,
    #[serde(default)]
    pub scope: Vec<String>,
    pub valid_from: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    #[serde(default, skip_serializing)]
    pub access_token: Option<SecretToken>,
    #[serde(default, skip_serializing)]
    pub refresh_token: Option<SecretToken>,
    #[serde(default, skip_serializing)]
    pub id_token: Option<SecretToken>,
    pub client_id: Option<Uuid>,
    pub access_token_info: Option<JwtAccessTokenInfo>,
}

impl AzureAccessToken {
    /// Bearer token with a window and no secrets or claims attached.
    pub fn bearer(valid_from: DateTime<Utc>, valid_until: DateTime<Utc>) -> Self {
        Self {
            token_type: "Bearer".to_string(),
            resource: None,
            app_redirect_url: None,
            scope: Vec::new(),
            valid_from,
            valid_until,
            access_token: None,
            refresh_token: None,
            id_token: None,
            client_id: None,
            access_token_info: None,
        }
    }

    /// A token is usable when it is a bearer token, has not expired, carries
    /// at least one scope and has its access token attached.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.token_type.eq_ignore_ascii_case(BEARER_TOKEN_TYPE)
            && self.valid_until >= now
            && !self.scope.is_empty()
            && self.access_token.is_some()
    }

    pub fn is_valid_now(&self) -> bool {
        self.is_valid_at(Utc::now())
    }

    pub fn token_owner(&self) -> Option<&str> {
        self.access_token_info.as_ref()?.name.as_deref()
    }

    pub fn user_principal_name(&self) -> Option<&str> {
        self.access_token_info.as_ref()?.upn.as_deref()
    }

    pub fn tenant_id(&self) -> Option<Uuid> {
        self.access_token_info.as_ref()?.tenant_id
    }

    pub fn app_name(&self) -> Option<&str> {
        self.access_token_info.as_ref()?.application_name.as_deref()
    }

    pub fn lifetime(&self) -> Duration {
        self.valid_until - self.valid_from
    }

    /// Remaining validity truncated to whole seconds; zero once expired.
    pub fn time_remaining_at(&self, now: DateTime<Utc>) -> Duration {
        if self.valid_until <= now {
            return Duration::zero();
        }
        Duration::seconds((self.valid_until - now).num_seconds())
    }

    pub fn time_remaining_now(&self) -> Duration {
        self.time_remaining_at(Utc::now())
    }

    /// Remaining share of the lifetime, rounded to a whole percent.
    pub fn percent_remaining_at(&self, now: DateTime<Utc>) -> i16 {
        let lifetime_ms = self.lifetime().num_milliseconds();
        if self.valid_until <= now || lifetime_ms <= 0 {
            return 0;
        }
        let remaining_ms = self.time_remaining_at(now).num_milliseconds();
        (remaining_ms as f64 / lifetime_ms as f64 * 100.0).round() as i16
    }

    pub fn percent_remaining_now(&self) -> i16 {
        self.percent_remaining_at(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::{AzureAccessToken, SecretToken};

    #[test]
    fn secret_debug_hides_value() {
        let secret = SecretToken::new("eyJ0eXAiOiJKV1Qi");
        let printed = format!("{secret:?}");
        assert!(!printed.contains("eyJ0"));
        assert_eq!(printed, "SecretToken(len=16)");
        assert_eq!(secret.expose(), "eyJ0eXAiOiJKV1Qi");
    }

    #[test]
    fn serialized_token_omits_secrets() {
        let now = chrono::Utc::now();
        let mut token = AzureAccessToken::bearer(now, now + chrono::Duration::hours(1));
        token.access_token = Some(SecretToken::new("top-secret"));
        let json = serde_json::to_string(&token).expect("token serializes");
        assert!(!json.contains("top-secret"));
        assert!(!json.contains("accessToken\""));
    }
}

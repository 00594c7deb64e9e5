//! Credential data types

use serde::{Deserialize, Serialize};

/// The persisted credential set
///
/// Every field is optional: an unset store reads back as all-absent rather
/// than as an error. Created on successful login or registration, the
/// access token is replaced on refresh, and the whole set is cleared on
/// logout or irrecoverable refresh failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl Credentials {
    /// True when no field is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.access_token.is_none() && self.refresh_token.is_none() && self.user_id.is_none()
    }

    /// Refresh token, treating blank strings as absent
    ///
    /// The refresh flow must not fire on a whitespace-only token left over
    /// from a buggy write.
    #[must_use]
    pub fn usable_refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }

    /// Apply a partial update, overwriting only the fields it carries
    pub fn apply(&mut self, update: CredentialUpdate) {
        if let Some(token) = update.access_token {
            self.access_token = Some(token);
        }
        if let Some(token) = update.refresh_token {
            self.refresh_token = Some(token);
        }
        if let Some(id) = update.user_id {
            self.user_id = Some(id);
        }
    }
}

/// A partial write against the store; unset fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct CredentialUpdate {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub user_id: Option<String>,
}

impl CredentialUpdate {
    /// Update carrying only a new access token (the refresh path)
    #[must_use]
    pub fn access_token(token: impl Into<String>) -> Self {
        Self { access_token: Some(token.into()), ..Self::default() }
    }

    /// Update carrying the full set issued at login/registration
    #[must_use]
    pub fn from_login(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            access_token: Some(access_token.into()),
            refresh_token: Some(refresh_token.into()),
            user_id: Some(user_id.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_merges_fieldwise() {
        let mut credentials = Credentials {
            access_token: Some("T1".into()),
            refresh_token: Some("R1".into()),
            user_id: Some("1".into()),
        };

        credentials.apply(CredentialUpdate::access_token("T2"));

        assert_eq!(credentials.access_token.as_deref(), Some("T2"));
        assert_eq!(credentials.refresh_token.as_deref(), Some("R1"));
        assert_eq!(credentials.user_id.as_deref(), Some("1"));
    }

    #[test]
    fn test_blank_refresh_token_is_unusable() {
        let credentials =
            Credentials { refresh_token: Some("   ".into()), ..Credentials::default() };
        assert!(credentials.usable_refresh_token().is_none());

        let credentials =
            Credentials { refresh_token: Some("R1".into()), ..Credentials::default() };
        assert_eq!(credentials.usable_refresh_token(), Some("R1"));
    }

    #[test]
    fn test_default_is_empty() {
        assert!(Credentials::default().is_empty());
    }
}

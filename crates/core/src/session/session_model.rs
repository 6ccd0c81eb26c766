//! Session domain models.

use serde::{Deserialize, Serialize};

use crate::constants::NULL_ACCOUNT_SENTINEL;
use crate::errors::{Result, ValidationError};

/// Snapshot of the session flags the action gate decides on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub is_logged_in: bool,
    pub has_selected_account: bool,
}

impl SessionState {
    pub fn new(is_logged_in: bool, has_selected_account: bool) -> Self {
        Self {
            is_logged_in,
            has_selected_account,
        }
    }

    /// Derives the flags from raw stored values.
    ///
    /// The access token does not count towards login; pages key on the user id.
    pub fn from_identity(
        user_id: Option<&str>,
        _access_token: Option<&str>,
        selected_account_id: Option<&str>,
    ) -> Self {
        fn present(value: Option<&str>) -> Option<&str> {
            value.map(str::trim).filter(|v| !v.is_empty())
        }
        Self {
            is_logged_in: present(user_id).is_some(),
            has_selected_account: present(selected_account_id)
                .filter(|id| *id != NULL_ACCOUNT_SENTINEL)
                .is_some(),
        }
    }
}

/// Client-held identity: who is acting and on which account.
///
/// Mirrors the values the browser keeps in local storage. Nothing here is
/// validated against the identity service; the flags only reflect presence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SessionIdentity {
    pub user_id: Option<String>,
    pub access_token: Option<String>,
    pub selected_account_id: Option<String>,
}

impl SessionIdentity {
    pub fn new(
        user_id: Option<String>,
        access_token: Option<String>,
        selected_account_id: Option<String>,
    ) -> Self {
        Self {
            user_id,
            access_token,
            selected_account_id,
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    /// The user id, if one is present and non-blank.
    pub fn user_id(&self) -> Option<&str> {
        self.user_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    /// The selected account id, ignoring the `"null"` placeholder.
    pub fn account_id(&self) -> Option<&str> {
        self.selected_account_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty() && *id != NULL_ACCOUNT_SENTINEL)
    }

    /// Bearer token to send to the data service on this user's behalf.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    pub fn require_user_id(&self) -> Result<&str> {
        self.user_id()
            .ok_or_else(|| ValidationError::MissingField("userId".to_string()).into())
    }

    pub fn require_account_id(&self) -> Result<&str> {
        self.account_id()
            .ok_or_else(|| ValidationError::MissingField("accountId".to_string()).into())
    }

    /// Derives the gate flags. Pages key "logged in" on the stored user id.
    pub fn state(&self) -> SessionState {
        SessionState::from_identity(
            self.user_id.as_deref(),
            self.access_token.as_deref(),
            self.selected_account_id.as_deref(),
        )
    }
}

//! Precondition check run before every mutating action.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use super::session_model::SessionState;
use crate::errors::{Error, Result};

/// How strict a mutating action is about the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Debts, goals, portfolio, income sources.
    RequiresLogin,
    /// Budgets and transactions only check for a selected account.
    RequiresAccount,
    RequiresLoginAndAccount,
}

impl ActionKind {
    pub fn requires_login(self) -> bool {
        matches!(self, ActionKind::RequiresLogin | ActionKind::RequiresLoginAndAccount)
    }

    pub fn requires_account(self) -> bool {
        matches!(
            self,
            ActionKind::RequiresAccount | ActionKind::RequiresLoginAndAccount
        )
    }
}

/// Outcome of the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Proceed,
    PromptLogin,
    PromptAccount,
}

impl Decision {
    pub fn is_proceed(self) -> bool {
        self == Decision::Proceed
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Proceed => "proceed",
            Decision::PromptLogin => "prompt_login",
            Decision::PromptAccount => "prompt_account",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decides whether a mutating action may proceed.
///
/// Login is checked before account selection.
pub fn evaluate(kind: ActionKind, session: &SessionState) -> Decision {
    if kind.requires_login() && !session.is_logged_in {
        return Decision::PromptLogin;
    }
    if kind.requires_account() && !session.has_selected_account {
        return Decision::PromptAccount;
    }
    Decision::Proceed
}

/// Like [`evaluate`], but turns a denial into [`Error::GateDenied`].
pub fn ensure_allowed(kind: ActionKind, session: &SessionState) -> Result<()> {
    match evaluate(kind, session) {
        Decision::Proceed => Ok(()),
        decision => {
            debug!("Gate denied {:?} action: {}", kind, decision);
            Err(Error::GateDenied(decision))
        }
    }
}

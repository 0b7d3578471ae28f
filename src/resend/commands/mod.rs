//! # Command Layer
//!
//! The auth workflows (`login`, `logout`, `whoami`, `list`, `select`),
//! first-run `init` and the upgrade check. Each command lives in its own submodule and is a plain
//! function over the keyring/resolver.
//!
//! ## What Commands Do NOT Do
//!
//! - **Terminal I/O**: no stdout/stderr. Interactive questions go through the
//!   [`prompt::Prompter`] trait, which the CLI implements with `dialoguer` and
//!   tests implement with a script.
//! - **Exit codes**: failures are `Err(ResendError)`; the CLI maps them.
//! - **Formatting**: results are [`CmdResult`] values. Secrets only ever leave
//!   this layer masked.
//!
//! ## Failure Reporting
//!
//! Anything the user has to fix (bad key, unknown name, nothing to log out) is
//! an `Err`. Successes, hints and warnings are [`CmdMessage`]s.
//!
//! ## Command Modules
//!
//! - [`init`]: First-run key setup, optionally into `./.env`
//! - [`login`]: Save/select a key, interactively if needed
//! - [`logout`]: Remove one or all saved keys
//! - [`whoami`]: Report the effective key and its source
//! - [`list`]: Enumerate saved keys
//! - [`select`]: Change the active key
//! - [`upgrade`]: Compare against the latest published version
//! - [`helpers`]: Masking, default names, input validation
//! - [`prompt`]: The prompt abstraction and its cancellation type

use crate::model::KeySource;
use serde::Serialize;

pub mod helpers;
pub mod init;
pub mod list;
pub mod login;
pub mod logout;
pub mod prompt;
pub mod select;
pub mod upgrade;
pub mod whoami;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One row of `auth list`. The token is already masked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyListing {
    pub name: String,
    pub token: String,
    pub selected: bool,
}

/// The effective credential as reported by `whoami` and `login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthStatus {
    #[serde(flatten)]
    pub source: KeySource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_key: Option<String>,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateStatus {
    pub current: String,
    pub latest: String,
    pub update_available: bool,
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub listed_keys: Vec<KeyListing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update: Option<UpdateStatus>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed_keys(mut self, keys: Vec<KeyListing>) -> Self {
        self.listed_keys = keys;
        self
    }

    pub fn with_auth(mut self, auth: AuthStatus) -> Self {
        self.auth = Some(auth);
        self
    }

    pub fn with_update(mut self, update: UpdateStatus) -> Self {
        self.update = Some(update);
        self
    }
}

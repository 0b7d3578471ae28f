//! # Data Model
//!
//! Types shared by the store, the keyring and the command layer.
//!
//! The on-disk document is a fixed-field struct rather than an open map so that
//! a renamed or mistyped field is a compile error, not a silently empty lookup.
//! It serializes as camelCase JSON:
//!
//! ```json
//! {
//!   "keys": { "work": "re_..." },
//!   "selectedKeyName": "work",
//!   "apiKey": "re_...",
//!   "defaultFrom": "me@example.com",
//!   "profile": "default",
//!   "lastVersionCheckAt": 1730000000000
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const DEFAULT_PROFILE: &str = "default";

/// Name used when a key is saved without an explicit name.
pub const DEFAULT_KEY_NAME: &str = "default";

/// Every Resend API key carries this prefix.
pub const API_KEY_PREFIX: &str = "re_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavedKey {
    pub name: String,
    pub key: String,
}

impl SavedKey {
    pub fn new(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
        }
    }
}

/// The persisted configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keys: Option<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_key_name: Option<String>,

    /// Single-key field from before named keys existed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_from: Option<String>,

    /// Absent from older files; reads back as [`DEFAULT_PROFILE`].
    #[serde(default = "default_profile", skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Epoch milliseconds of the last update check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_version_check_at: Option<i64>,
}

impl Default for ConfigDocument {
    fn default() -> Self {
        Self {
            keys: None,
            selected_key_name: None,
            api_key: None,
            default_from: None,
            profile: default_profile(),
            last_version_check_at: None,
        }
    }
}

fn default_profile() -> Option<String> {
    Some(DEFAULT_PROFILE.to_string())
}

/// Where the effective API key came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", content = "name", rename_all = "lowercase")]
pub enum KeySource {
    Environment,
    Saved(String),
    Legacy,
}

impl fmt::Display for KeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySource::Environment => write!(f, "environment"),
            KeySource::Saved(_) => write!(f, "saved"),
            KeySource::Legacy => write!(f, "saved (legacy)"),
        }
    }
}

/// What `auth login` should do when keys are already saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginAction {
    Use,
    Add,
    Replace,
}

impl LoginAction {
    pub fn all() -> &'static [LoginAction] {
        &[LoginAction::Use, LoginAction::Add, LoginAction::Replace]
    }

    pub fn label(&self) -> &'static str {
        match self {
            LoginAction::Use => "Use existing key",
            LoginAction::Add => "Add new key",
            LoginAction::Replace => "Replace active key",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_document_keeps_profile_only() {
        let doc = ConfigDocument::default();
        let json = serde_json::to_string(&doc).unwrap();
        assert_eq!(json, r#"{"profile":"default"}"#);
    }

    #[test]
    fn document_reads_camel_case_and_ignores_unknown_fields() {
        let json = r#"{
            "keys": {"work": "re_work"},
            "selectedKeyName": "work",
            "lastVersionCheckAt": 42,
            "somethingNew": true
        }"#;
        let doc: ConfigDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.selected_key_name.as_deref(), Some("work"));
        assert_eq!(doc.last_version_check_at, Some(42));
        assert_eq!(doc.keys.unwrap().get("work").map(String::as_str), Some("re_work"));
        assert_eq!(doc.profile.as_deref(), Some(DEFAULT_PROFILE));
    }

    #[test]
    fn key_source_display() {
        assert_eq!(KeySource::Environment.to_string(), "environment");
        assert_eq!(KeySource::Saved("work".into()).to_string(), "saved");
        assert_eq!(KeySource::Legacy.to_string(), "saved (legacy)");
    }
}

//! `init`: first-run setup through the single-key path.
//!
//! Takes the key from `--key` or asks for it, then stores it with
//! [`CredentialResolver::set_api_key`]: saved and selected as `default`, and
//! mirrored into the legacy `apiKey` field.
//!
//! With an env file path, `RESEND_API_KEY=<key>` is appended to that file
//! unless it already assigns the variable. A file that cannot be written is a
//! warning; the key is already saved by then.

use super::helpers::{mask_api_key, trimmed, validate_api_key};
use super::prompt::Prompter;
use super::{AuthStatus, CmdMessage, CmdResult};
use crate::env::API_KEY_VAR;
use crate::error::{ResendError, Result};
use crate::model::{KeySource, API_KEY_PREFIX, DEFAULT_KEY_NAME};
use crate::resolver::CredentialResolver;
use crate::store::StorageBackend;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    pub key: Option<String>,
    /// Where to append `RESEND_API_KEY`, usually `./.env`.
    pub env_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvFileOutcome {
    Appended,
    AlreadyPresent,
}

pub fn run<B: StorageBackend>(
    resolver: &CredentialResolver<B>,
    prompter: &mut dyn Prompter,
    options: InitOptions,
    config_file: &Path,
) -> Result<CmdResult> {
    let api_key = match trimmed(options.key) {
        Some(key) => key,
        None => prompter
            .text("Enter your Resend API key:", None, validate_api_key)?
            .or_cancel()?
            .trim()
            .to_string(),
    };
    if !api_key.starts_with(API_KEY_PREFIX) {
        return Err(ResendError::InvalidApiKey);
    }

    resolver.set_api_key(Some(&api_key))?;

    let mut result = CmdResult::default();
    if let Some(path) = options.env_file {
        result.add_message(match append_env_key(&path, &api_key) {
            Ok(EnvFileOutcome::Appended) => {
                CmdMessage::info(format!("Appended {API_KEY_VAR} to {}.", path.display()))
            }
            Ok(EnvFileOutcome::AlreadyPresent) => CmdMessage::warning(format!(
                "{} already contains {API_KEY_VAR}; not overwriting.",
                path.display()
            )),
            Err(e) => CmdMessage::warning(format!("Could not write {}: {e}", path.display())),
        });
    }

    let masked = mask_api_key(&api_key);
    Ok(result
        .with_message(CmdMessage::success(
            "Initialized. You can now use the CLI.",
        ))
        .with_message(CmdMessage::info(format!(
            "Active key: {DEFAULT_KEY_NAME} ({masked})"
        )))
        .with_message(CmdMessage::info(format!(
            "Config file: {}",
            config_file.display()
        )))
        .with_message(CmdMessage::info(format!(
            "{API_KEY_VAR}, when set, overrides the saved key."
        )))
        .with_auth(AuthStatus {
            source: KeySource::Saved(DEFAULT_KEY_NAME.to_string()),
            selected_key: Some(DEFAULT_KEY_NAME.to_string()),
            token: masked,
        }))
}

/// Append `RESEND_API_KEY=<key>` to `path`, creating it if needed. An
/// existing assignment is left alone.
pub fn append_env_key(path: &Path, key: &str) -> Result<EnvFileOutcome> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e.into()),
    };
    if content.contains(&format!("{API_KEY_VAR}=")) {
        return Ok(EnvFileOutcome::AlreadyPresent);
    }

    let separator = if content.is_empty() || content.ends_with('\n') {
        ""
    } else {
        "\n"
    };
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(format!("{separator}{API_KEY_VAR}={key}\n").as_bytes())?;
    tracing::debug!(path = %path.display(), "appended api key to env file");
    Ok(EnvFileOutcome::Appended)
}

//! `auth login`: save a key under a name and make it the active one.
//!
//! With `--key` the flow is non-interactive. Without it:
//!
//! - If keys are already saved, ask whether to **use** one, **add** a new one
//!   or **replace** the active one.
//!   - *use*: select `--name`, else keep the current selection, else take the
//!     only saved key, else ask which one.
//!   - *add*: ask for a name (pre-filled with `default` or `key-N`).
//!   - *replace*: reuse the selected name, else the first saved, else `default`.
//! - Then ask for the key itself (must start with `re_`).
//!
//! Nothing is written until every question has been answered, so a cancel at
//! any point leaves the config untouched.

use super::helpers::{
    default_add_key_name, default_login_name, mask_api_key, trimmed, validate_api_key,
    validate_key_name,
};
use super::prompt::Prompter;
use super::{AuthStatus, CmdMessage, CmdResult};
use crate::error::{ResendError, Result};
use crate::keyring::Keyring;
use crate::model::{KeySource, LoginAction, SavedKey, API_KEY_PREFIX, DEFAULT_KEY_NAME};
use crate::store::StorageBackend;

#[derive(Debug, Clone, Default)]
pub struct LoginOptions {
    pub key: Option<String>,
    pub name: Option<String>,
}

pub fn run<B: StorageBackend>(
    keyring: &Keyring<B>,
    prompter: &mut dyn Prompter,
    options: LoginOptions,
) -> Result<CmdResult> {
    let saved = keyring.list_keys()?;
    let selected = keyring.selected_key_name()?;
    let mut name = trimmed(options.name);
    let api_key = trimmed(options.key);

    if api_key.is_none() && !saved.is_empty() {
        let labels: Vec<String> = LoginAction::all()
            .iter()
            .map(|a| a.label().to_string())
            .collect();
        let picked = prompter
            .select("You already have saved keys. What do you want to do?", &labels)?
            .or_cancel()?;
        let action = LoginAction::all()
            .get(picked)
            .copied()
            .ok_or_else(|| ResendError::Validation("Unknown login action".to_string()))?;

        match action {
            LoginAction::Use => {
                return use_existing(keyring, prompter, name.as_deref(), selected, &saved);
            }
            LoginAction::Replace => {
                if name.is_none() {
                    name = Some(
                        selected
                            .clone()
                            .or_else(|| saved.first().map(|k| k.name.clone()))
                            .unwrap_or_else(|| DEFAULT_KEY_NAME.to_string()),
                    );
                }
            }
            LoginAction::Add => {
                if name.is_none() {
                    let suggested = default_add_key_name(&saved);
                    let entered = prompter
                        .text("Name for this key:", Some(&suggested), validate_key_name)?
                        .or_cancel()?;
                    name = Some(entered.trim().to_string());
                }
            }
        }
    }

    let api_key = match api_key {
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

    let name = name.unwrap_or_else(|| default_login_name(&saved, selected.as_deref()));

    keyring.save_key(&name, &api_key)?;
    keyring.select_key(&name)?;

    let masked = mask_api_key(&api_key);
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Saved key '{name}' and made it active."
        )))
        .with_message(CmdMessage::info(format!("Active key: {name} ({masked})")))
        .with_auth(AuthStatus {
            source: KeySource::Saved(name.clone()),
            selected_key: Some(name),
            token: masked,
        }))
}

fn use_existing<B: StorageBackend>(
    keyring: &Keyring<B>,
    prompter: &mut dyn Prompter,
    name: Option<&str>,
    selected: Option<String>,
    saved: &[SavedKey],
) -> Result<CmdResult> {
    if let Some(name) = name {
        return select_and_report(keyring, name);
    }

    if let Some(selected) = selected {
        return Ok(CmdResult::default()
            .with_message(CmdMessage::success(format!("Already using '{selected}'."))));
    }

    if let [only] = saved {
        return select_and_report(keyring, &only.name);
    }

    let names: Vec<String> = saved.iter().map(|k| k.name.clone()).collect();
    let picked = prompter.select("Select a saved key:", &names)?.or_cancel()?;
    let name = names
        .get(picked)
        .ok_or_else(|| ResendError::Validation("Unknown saved key".to_string()))?;
    select_and_report(keyring, name)
}

fn select_and_report<B: StorageBackend>(keyring: &Keyring<B>, name: &str) -> Result<CmdResult> {
    if !keyring.select_key(name)? {
        return Err(ResendError::KeyNotFound(name.to_string()));
    }
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Selected '{name}' as active key."))))
}

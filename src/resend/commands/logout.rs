use super::{CmdMessage, CmdResult};
use crate::error::{ResendError, Result};
use crate::resolver::CredentialResolver;
use crate::store::StorageBackend;

/// Which saved key(s) `auth logout` removes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoutTarget {
    All,
    Named(String),
    /// Whatever is currently selected.
    Active,
}

pub const ENV_LOGOUT_HINT: &str =
    "RESEND_API_KEY is currently active from environment. Unset it to log out from env-based auth.";

pub fn run<B: StorageBackend>(
    resolver: &CredentialResolver<B>,
    target: LogoutTarget,
) -> Result<CmdResult> {
    let keyring = resolver.keyring();

    match target {
        LogoutTarget::All => {
            keyring.clear_saved_keys()?;
            Ok(CmdResult::default().with_message(CmdMessage::success("Removed all saved keys.")))
        }
        LogoutTarget::Named(name) => {
            if !keyring.remove_key(&name)? {
                return Err(ResendError::KeyNotFound(name));
            }
            Ok(CmdResult::default()
                .with_message(CmdMessage::success(format!("Removed saved key '{name}'."))))
        }
        LogoutTarget::Active => {
            let Some(selected) = keyring.selected_key_name()? else {
                if resolver.env_override().is_some() {
                    return Ok(
                        CmdResult::default().with_message(CmdMessage::warning(ENV_LOGOUT_HINT))
                    );
                }
                return Err(ResendError::NoActiveKey);
            };

            keyring.remove_key(&selected)?;
            let mut result = CmdResult::default().with_message(CmdMessage::success(format!(
                "Removed active saved key '{selected}'."
            )));
            if let Some(next) = keyring.selected_key_name()? {
                result.add_message(CmdMessage::info(format!("Active key is now '{next}'.")));
            }
            Ok(result)
        }
    }
}

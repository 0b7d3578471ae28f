use super::helpers::mask_api_key;
use super::{CmdMessage, CmdResult};
use crate::error::{ResendError, Result};
use crate::keyring::Keyring;
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(keyring: &Keyring<B>, name: &str) -> Result<CmdResult> {
    if !keyring.select_key(name)? {
        return Err(ResendError::KeyNotFound(name.to_string()));
    }

    let mut result = CmdResult::default()
        .with_message(CmdMessage::success(format!("Selected '{name}' as active key.")));
    if let Some(key) = keyring.get_key(name)? {
        result.add_message(CmdMessage::info(format!(
            "Active token: {}",
            mask_api_key(&key)
        )));
    }
    Ok(result)
}

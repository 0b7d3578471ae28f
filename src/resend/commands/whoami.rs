use super::helpers::mask_api_key;
use super::{AuthStatus, CmdMessage, CmdResult};
use crate::error::{ResendError, Result};
use crate::model::KeySource;
use crate::resolver::CredentialResolver;
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(resolver: &CredentialResolver<B>) -> Result<CmdResult> {
    let Some((key, source)) = resolver.resolve()? else {
        return Err(ResendError::NotAuthenticated);
    };
    let selected = resolver.keyring().selected_key_name()?;
    let token = mask_api_key(&key);

    let mut result = CmdResult::default()
        .with_message(CmdMessage::info(format!("Source: {source}")));
    if let Some(name) = &selected {
        result.add_message(CmdMessage::info(format!("Selected key: {name}")));
    }
    result.add_message(CmdMessage::info(format!("Token: {token}")));

    Ok(result.with_auth(AuthStatus {
        source,
        selected_key: selected,
        token,
    }))
}

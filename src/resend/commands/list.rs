use super::helpers::mask_api_key;
use super::{CmdMessage, CmdResult, KeyListing};
use crate::error::Result;
use crate::resolver::CredentialResolver;
use crate::store::StorageBackend;

pub const NO_SAVED_KEYS: &str = "No saved keys. Run `resend auth login` to add one.";
pub const ENV_OVERRIDE_HINT: &str =
    "RESEND_API_KEY is set and overrides saved keys for this process.";

pub fn run<B: StorageBackend>(resolver: &CredentialResolver<B>) -> Result<CmdResult> {
    let keyring = resolver.keyring();
    let saved = keyring.list_keys()?;
    let selected = keyring.selected_key_name()?;
    let env_key = resolver.env_override();

    let mut result = CmdResult::default();

    if saved.is_empty() {
        result.add_message(CmdMessage::warning(NO_SAVED_KEYS));
        if let Some(key) = env_key {
            result.add_message(CmdMessage::info(format!(
                "Environment key is set: {}",
                mask_api_key(&key)
            )));
        }
        return Ok(result);
    }

    let listed = saved
        .into_iter()
        .map(|k| KeyListing {
            selected: selected.as_deref() == Some(k.name.as_str()),
            token: mask_api_key(&k.key),
            name: k.name,
        })
        .collect();
    result = result.with_listed_keys(listed);

    if env_key.is_some() {
        result.add_message(CmdMessage::info(ENV_OVERRIDE_HINT));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{MapEnv, API_KEY_VAR};
    use crate::store::mem_backend::MemBackend;
    use crate::store::ConfigStore;

    #[test]
    fn lists_sorted_masked_with_selection_marker() {
        let store = ConfigStore::new(MemBackend::new());
        let env = MapEnv::new();
        let resolver = CredentialResolver::new(&store, &env);
        resolver.keyring().save_key("zebra", "re_zebra_0123456789").unwrap();
        resolver.keyring().save_key("apple", "re_apple").unwrap();
        resolver.keyring().select_key("zebra").unwrap();

        let result = run(&resolver).unwrap();

        assert_eq!(
            result.listed_keys,
            vec![
                KeyListing {
                    name: "apple".into(),
                    token: "re_a***".into(),
                    selected: false,
                },
                KeyListing {
                    name: "zebra".into(),
                    token: "re_zeb...6789".into(),
                    selected: true,
                },
            ]
        );
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_store_hints_at_login() {
        let store = ConfigStore::new(MemBackend::new());
        let env = MapEnv::new();
        let resolver = CredentialResolver::new(&store, &env);

        let result = run(&resolver).unwrap();

        assert!(result.listed_keys.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].content, NO_SAVED_KEYS);
    }

    #[test]
    fn empty_store_shows_masked_env_key() {
        let store = ConfigStore::new(MemBackend::new());
        let env = MapEnv::new().with(API_KEY_VAR, "re_env");
        let resolver = CredentialResolver::new(&store, &env);

        let result = run(&resolver).unwrap();

        assert_eq!(result.messages[1].content, "Environment key is set: re_e***");
    }

    #[test]
    fn env_override_is_noted_next_to_saved_keys() {
        let store = ConfigStore::new(MemBackend::new());
        let env = MapEnv::new().with(API_KEY_VAR, "re_env");
        let resolver = CredentialResolver::new(&store, &env);
        resolver.keyring().save_key("work", "re_work").unwrap();

        let result = run(&resolver).unwrap();

        assert_eq!(result.listed_keys.len(), 1);
        assert_eq!(result.messages[0].content, ENV_OVERRIDE_HINT);
    }
}

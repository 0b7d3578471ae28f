//! # Credential Resolution
//!
//! Decides which API key an invocation uses. Precedence, evaluated on every
//! call (nothing is cached, the environment may change between calls):
//!
//! 1. `RESEND_API_KEY`, when set and non-empty. Always wins.
//! 2. The selected saved key, when the selection resolves.
//! 3. The legacy single `apiKey` field.
//! 4. Nothing.
//!
//! Assigning the legacy key through [`CredentialResolver::set_api_key`] keeps
//! both formats in sync: the value is saved as `"default"`, selected, and
//! mirrored into `apiKey` for older readers.

use crate::env::{Environment, API_KEY_VAR};
use crate::error::Result;
use crate::keyring::Keyring;
use crate::model::{KeySource, DEFAULT_KEY_NAME};
use crate::store::fields::{ApiKey, DefaultFrom};
use crate::store::{ConfigStore, StorageBackend};

pub struct CredentialResolver<'a, B: StorageBackend> {
    store: &'a ConfigStore<B>,
    env: &'a dyn Environment,
}

impl<'a, B: StorageBackend> CredentialResolver<'a, B> {
    pub fn new(store: &'a ConfigStore<B>, env: &'a dyn Environment) -> Self {
        Self { store, env }
    }

    pub fn keyring(&self) -> Keyring<'a, B> {
        Keyring::new(self.store)
    }

    /// The non-empty `RESEND_API_KEY` value, if any.
    pub fn env_override(&self) -> Option<String> {
        self.env.non_empty(API_KEY_VAR)
    }

    pub fn effective_api_key(&self) -> Result<Option<String>> {
        Ok(self.resolve()?.map(|(key, _)| key))
    }

    pub fn key_source(&self) -> Result<Option<KeySource>> {
        Ok(self.resolve()?.map(|(_, source)| source))
    }

    /// The effective key together with where it came from.
    pub fn resolve(&self) -> Result<Option<(String, KeySource)>> {
        if let Some(key) = self.env_override() {
            return Ok(Some((key, KeySource::Environment)));
        }

        let keyring = self.keyring();
        if let Some(name) = keyring.selected_key_name()? {
            if let Some(key) = keyring.get_key(&name)?.filter(|k| !k.is_empty()) {
                return Ok(Some((key, KeySource::Saved(name))));
            }
        }

        Ok(self
            .store
            .get::<ApiKey>()?
            .filter(|k| !k.is_empty())
            .map(|key| (key, KeySource::Legacy)))
    }

    /// Legacy single-key assignment. `None` or an empty value removes it.
    pub fn set_api_key(&self, value: Option<&str>) -> Result<()> {
        let keyring = self.keyring();
        match value.filter(|v| !v.is_empty()) {
            Some(key) => {
                keyring.save_key(DEFAULT_KEY_NAME, key)?;
                keyring.select_key(DEFAULT_KEY_NAME)?;
                self.store.set::<ApiKey>(key.to_string())
            }
            None => {
                keyring.remove_key(DEFAULT_KEY_NAME)?;
                self.store.delete::<ApiKey>()
            }
        }
    }

    pub fn default_from(&self) -> Result<Option<String>> {
        self.store.get::<DefaultFrom>()
    }

    pub fn set_default_from(&self, value: Option<&str>) -> Result<()> {
        match value {
            Some(from) => self.store.set::<DefaultFrom>(from.to_string()),
            None => self.store.delete::<DefaultFrom>(),
        }
    }
}

//! # Keyring
//!
//! Named API keys over the [`ConfigStore`]: save, look up, list, select,
//! remove and bulk-clear.
//!
//! ## Selection Invariant
//!
//! `selectedKeyName` is either unset or names a saved key. Every mutation
//! here preserves that:
//!
//! - [`Keyring::select_key`] refuses names that are not saved.
//! - [`Keyring::remove_key`] moves the selection to the first remaining name
//!   (lexicographic), or clears it when nothing is left.
//! - [`Keyring::clear_saved_keys`] drops keys, selection and the legacy
//!   `apiKey` field in a single write.
//!
//! A hand-edited document can still point at a missing key; readers treat
//! such a selection as unset.

use crate::error::{ResendError, Result};
use crate::model::SavedKey;
use crate::store::fields::{Keys, SelectedKeyName};
use crate::store::{ConfigStore, StorageBackend};
use std::collections::BTreeMap;

pub struct Keyring<'a, B: StorageBackend> {
    store: &'a ConfigStore<B>,
}

impl<'a, B: StorageBackend> Keyring<'a, B> {
    pub fn new(store: &'a ConfigStore<B>) -> Self {
        Self { store }
    }

    /// The selected key name, if it refers to a saved key.
    pub fn selected_key_name(&self) -> Result<Option<String>> {
        let doc = self.store.document()?;
        Ok(doc.selected_key_name.filter(|name| {
            doc.keys
                .as_ref()
                .is_some_and(|keys| keys.contains_key(name))
        }))
    }

    /// Insert or overwrite `name`. Saving the same pair twice is a no-op.
    pub fn save_key(&self, name: &str, key: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(ResendError::Validation("Key name is required".to_string()));
        }
        tracing::debug!(name, "saving key");
        self.store.update(|doc| {
            doc.keys
                .get_or_insert_with(BTreeMap::new)
                .insert(name.to_string(), key.to_string());
        })
    }

    pub fn get_key(&self, name: &str) -> Result<Option<String>> {
        Ok(self.keys_map()?.remove(name))
    }

    /// All saved keys, sorted by name.
    pub fn list_keys(&self) -> Result<Vec<SavedKey>> {
        Ok(self
            .keys_map()?
            .into_iter()
            .map(|(name, key)| SavedKey { name, key })
            .collect())
    }

    /// Select `name` if it is saved with a non-empty value. Returns false
    /// (and changes nothing) otherwise.
    pub fn select_key(&self, name: &str) -> Result<bool> {
        if self.get_key(name)?.filter(|k| !k.is_empty()).is_none() {
            return Ok(false);
        }
        tracing::debug!(name, "selecting key");
        self.store.set::<SelectedKeyName>(name.to_string())?;
        Ok(true)
    }

    /// Remove `name`. Returns false (and changes nothing) if it is not saved.
    pub fn remove_key(&self, name: &str) -> Result<bool> {
        if !self.keys_map()?.contains_key(name) {
            return Ok(false);
        }
        tracing::debug!(name, "removing key");
        self.store.update(|doc| {
            let keys = doc.keys.get_or_insert_with(BTreeMap::new);
            keys.remove(name);
            if doc.selected_key_name.as_deref() == Some(name) {
                doc.selected_key_name = keys.keys().next().cloned();
            }
        })?;
        Ok(true)
    }

    /// Forget every saved key, the selection and the legacy single key.
    pub fn clear_saved_keys(&self) -> Result<()> {
        tracing::debug!("clearing saved keys");
        self.store.update(|doc| {
            doc.keys = None;
            doc.selected_key_name = None;
            doc.api_key = None;
        })
    }

    fn keys_map(&self) -> Result<BTreeMap<String, String>> {
        Ok(self.store.get::<Keys>()?.unwrap_or_default())
    }
}

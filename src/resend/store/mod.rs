//! # Storage Layer
//!
//! All persisted CLI state lives in one JSON document (see [`crate::model::ConfigDocument`]).
//! [`ConfigStore`] is its sole reader and writer; the keyring, resolver and
//! version check all go through it and never touch the file directly.
//!
//! ## Field Access
//!
//! Fields are addressed by marker types in [`fields`], so `get`/`set`/`delete`
//! are checked against the document schema at compile time:
//!
//! ```ignore
//! store.set::<fields::SelectedKeyName>("work".to_string())?;
//! let keys = store.get::<fields::Keys>()?.unwrap_or_default();
//! store.delete::<fields::ApiKey>()?;
//! ```
//!
//! `set` takes a plain value, never an `Option`: clearing a field is always an
//! explicit `delete`. Changes that touch several fields at once use
//! [`ConfigStore::update`], which loads, mutates and saves in a single write.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: Production. Writes go to a temp file that is
//!   renamed over `config.json`.
//! - [`mem_backend::MemBackend`]: For testing logic without filesystem I/O.
//!
//! ## Concurrency
//!
//! None. Two processes writing at once may lose one update; the CLI is a
//! single-user, short-lived tool.

use crate::error::Result;
use crate::model::ConfigDocument;
use std::collections::BTreeMap;
use std::path::PathBuf;

pub mod fs_backend;
pub mod mem_backend;

/// Raw document I/O. The "how" of storage; [`ConfigStore`] handles the "what".
pub trait StorageBackend {
    /// Load the document. `Ok(None)` when nothing has been written yet.
    fn load(&self) -> Result<Option<ConfigDocument>>;

    /// Persist the whole document. MUST replace it atomically.
    fn save(&self, doc: &ConfigDocument) -> Result<()>;

    /// Where the document lives (a virtual path for in-memory backends).
    fn location(&self) -> PathBuf;
}

/// A typed handle on one member of [`ConfigDocument`].
pub trait Field {
    const NAME: &'static str;
    type Value: Clone;

    fn read(doc: &ConfigDocument) -> Option<&Self::Value>;
    fn slot(doc: &mut ConfigDocument) -> &mut Option<Self::Value>;
}

macro_rules! document_field {
    ($marker:ident, $name:literal, $member:ident, $ty:ty) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $marker;

        impl Field for $marker {
            const NAME: &'static str = $name;
            type Value = $ty;

            fn read(doc: &ConfigDocument) -> Option<&Self::Value> {
                doc.$member.as_ref()
            }

            fn slot(doc: &mut ConfigDocument) -> &mut Option<Self::Value> {
                &mut doc.$member
            }
        }
    };
}

pub mod fields {
    use super::*;

    document_field!(Keys, "keys", keys, BTreeMap<String, String>);
    document_field!(SelectedKeyName, "selectedKeyName", selected_key_name, String);
    document_field!(ApiKey, "apiKey", api_key, String);
    document_field!(DefaultFrom, "defaultFrom", default_from, String);
    document_field!(Profile, "profile", profile, String);
    document_field!(LastVersionCheckAt, "lastVersionCheckAt", last_version_check_at, i64);
}

pub struct ConfigStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> ConfigStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Snapshot of the current document, defaults if none was saved yet.
    pub fn document(&self) -> Result<ConfigDocument> {
        Ok(self.backend.load()?.unwrap_or_default())
    }

    pub fn get<F: Field>(&self) -> Result<Option<F::Value>> {
        let doc = self.document()?;
        Ok(F::read(&doc).cloned())
    }

    pub fn set<F: Field>(&self, value: F::Value) -> Result<()> {
        tracing::debug!(field = F::NAME, "config set");
        self.update(|doc| *F::slot(doc) = Some(value))
    }

    pub fn delete<F: Field>(&self) -> Result<()> {
        tracing::debug!(field = F::NAME, "config delete");
        self.update(|doc| *F::slot(doc) = None)
    }

    /// Reset every field to its default. Only `profile` survives.
    pub fn clear(&self) -> Result<()> {
        tracing::debug!("config clear");
        self.backend.save(&ConfigDocument::default())
    }

    /// Load, mutate and save in one write. Readers never observe a state
    /// where only part of `f`'s changes are applied.
    pub fn update<T>(&self, f: impl FnOnce(&mut ConfigDocument) -> T) -> Result<T> {
        let mut doc = self.document()?;
        let out = f(&mut doc);
        self.backend.save(&doc)?;
        Ok(out)
    }
}

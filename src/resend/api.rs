//! # API Facade
//!
//! [`ResendApi`] is the context object for one process: it owns the config
//! store and the environment view, and every UI (the CLI today) goes through
//! it. It is constructed once at startup and passed down; nothing in the crate
//! reaches for a global client or config instance.
//!
//! Like the rest of the library it does no terminal I/O. Methods dispatch to
//! `commands/*` and return `Result<CmdResult>`.
//!
//! ## Generic Over StorageBackend
//!
//! - Production: `ResendApi<FsBackend>` via [`ResendApi::from_env`]
//! - Testing: `ResendApi<MemBackend>` with a `MapEnv`

use crate::commands::init::InitOptions;
use crate::commands::login::LoginOptions;
use crate::commands::logout::LogoutTarget;
use crate::commands::prompt::Prompter;
use crate::commands::{self, CmdResult};
use crate::env::{Environment, ProcessEnv};
use crate::error::Result;
use crate::keyring::Keyring;
use crate::paths::ConfigPaths;
use crate::resolver::CredentialResolver;
use crate::store::fs_backend::FsBackend;
use crate::store::{ConfigStore, StorageBackend};
use crate::version_check::{self, VersionSource};
use std::path::PathBuf;

pub struct ResendApi<B: StorageBackend> {
    store: ConfigStore<B>,
    env: Box<dyn Environment>,
}

impl ResendApi<FsBackend> {
    /// Config file from the OS location (or `RESEND_CLI_CONFIG_DIR`), real
    /// process environment.
    pub fn from_env() -> Result<Self> {
        let env = ProcessEnv;
        let paths = ConfigPaths::resolve(&env)?;
        tracing::debug!(dir = %paths.dir().display(), "using config dir");
        Ok(Self::new(
            ConfigStore::new(FsBackend::from_paths(&paths)),
            Box::new(env),
        ))
    }
}

impl<B: StorageBackend> ResendApi<B> {
    pub fn new(store: ConfigStore<B>, env: Box<dyn Environment>) -> Self {
        Self { store, env }
    }

    pub fn store(&self) -> &ConfigStore<B> {
        &self.store
    }

    pub fn config_location(&self) -> PathBuf {
        self.store.backend().location()
    }

    fn resolver(&self) -> CredentialResolver<'_, B> {
        CredentialResolver::new(&self.store, self.env.as_ref())
    }

    fn keyring(&self) -> Keyring<'_, B> {
        Keyring::new(&self.store)
    }

    pub fn init(&self, prompter: &mut dyn Prompter, options: InitOptions) -> Result<CmdResult> {
        commands::init::run(&self.resolver(), prompter, options, &self.config_location())
    }

    pub fn login(&self, prompter: &mut dyn Prompter, options: LoginOptions) -> Result<CmdResult> {
        commands::login::run(&self.keyring(), prompter, options)
    }

    pub fn logout(&self, target: LogoutTarget) -> Result<CmdResult> {
        commands::logout::run(&self.resolver(), target)
    }

    pub fn whoami(&self) -> Result<CmdResult> {
        commands::whoami::run(&self.resolver())
    }

    pub fn list_keys(&self) -> Result<CmdResult> {
        commands::list::run(&self.resolver())
    }

    pub fn select_key(&self, name: &str) -> Result<CmdResult> {
        commands::select::run(&self.keyring(), name)
    }

    /// The key outgoing requests would use right now.
    pub fn effective_api_key(&self) -> Result<Option<String>> {
        self.resolver().effective_api_key()
    }

    /// Legacy single-key assignment, see [`CredentialResolver::set_api_key`].
    pub fn set_api_key(&self, value: Option<&str>) -> Result<()> {
        self.resolver().set_api_key(value)
    }

    pub fn default_from(&self) -> Result<Option<String>> {
        self.resolver().default_from()
    }

    pub fn set_default_from(&self, value: Option<&str>) -> Result<()> {
        self.resolver().set_default_from(value)
    }

    pub fn check_for_update(&self, source: &dyn VersionSource, current: &str) -> CmdResult {
        commands::upgrade::run(source, current)
    }

    pub fn update_checks_disabled(&self) -> bool {
        version_check::checks_disabled(self.env.as_ref())
    }

    /// Throttled startup notice. Honors the environment switches.
    pub fn update_notice(
        &self,
        source: &dyn VersionSource,
        current: &str,
        now_ms: i64,
    ) -> Result<Option<String>> {
        if self.update_checks_disabled() {
            return Ok(None);
        }
        version_check::update_notice(&self.store, source, current, now_ms)
    }
}

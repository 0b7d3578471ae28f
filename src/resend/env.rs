//! Environment access.
//!
//! Nothing outside this module calls `std::env::var`. Components take a
//! `&dyn Environment` so precedence rules can be tested with a plain map
//! instead of mutating the process environment.

use std::collections::HashMap;

/// Overrides any saved key for the current process.
pub const API_KEY_VAR: &str = "RESEND_API_KEY";

/// Replaces the per-OS config directory. Also used by tests.
pub const CONFIG_DIR_VAR: &str = "RESEND_CLI_CONFIG_DIR";

/// Disables the startup update notice unless set to `0` or `false`.
pub const NO_VERSION_CHECK_VAR: &str = "RESEND_CLI_NO_VERSION_CHECK";

pub trait Environment {
    fn var(&self, name: &str) -> Option<String>;

    /// Like [`Environment::var`], but treats an empty value as unset.
    fn non_empty(&self, name: &str) -> Option<String> {
        self.var(name).filter(|v| !v.is_empty())
    }

    /// True when `name` is set to anything other than `0` or `false`.
    fn flag(&self, name: &str) -> bool {
        match self.var(name) {
            Some(v) => v != "0" && !v.eq_ignore_ascii_case("false"),
            None => false,
        }
    }
}

/// Reads the real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// A fixed set of variables, for tests.
#[derive(Debug, Default, Clone)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }

    pub fn set(&mut self, name: &str, value: &str) {
        self.vars.insert(name.to_string(), value.to_string());
    }

    pub fn remove(&mut self, name: &str) {
        self.vars.remove(name);
    }
}

impl Environment for MapEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

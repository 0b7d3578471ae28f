use crate::env::{Environment, CONFIG_DIR_VAR};
use crate::error::{ResendError, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    dir: PathBuf,
    /// Set when the directory came from `RESEND_CLI_CONFIG_DIR`.
    overridden: bool,
}

impl ConfigPaths {
    /// Resolve the config directory: the env override if present, else the
    /// OS config dir (`~/.config/resend-cli` on Linux).
    pub fn resolve(env: &dyn Environment) -> Result<Self> {
        if let Some(dir) = env.non_empty(CONFIG_DIR_VAR) {
            return Ok(Self {
                dir: PathBuf::from(dir),
                overridden: true,
            });
        }
        let proj_dirs = ProjectDirs::from("com", "resend", "resend-cli")
            .ok_or_else(|| ResendError::Store("Could not determine config dir".to_string()))?;
        Ok(Self {
            dir: proj_dirs.config_dir().to_path_buf(),
            overridden: false,
        })
    }

    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            overridden: true,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.dir.join(CONFIG_FILENAME)
    }

    pub fn is_overridden(&self) -> bool {
        self.overridden
    }
}

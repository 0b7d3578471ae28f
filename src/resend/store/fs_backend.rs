use super::StorageBackend;
use crate::error::{ResendError, Result};
use crate::model::ConfigDocument;
use crate::paths::ConfigPaths;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FsBackend {
    file: PathBuf,
}

impl FsBackend {
    pub fn new(file: PathBuf) -> Self {
        Self { file }
    }

    pub fn from_paths(paths: &ConfigPaths) -> Self {
        Self::new(paths.config_file())
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(ResendError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load(&self) -> Result<Option<ConfigDocument>> {
        if !self.file.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.file).map_err(ResendError::Io)?;
        if content.trim().is_empty() {
            return Ok(None);
        }
        let doc: ConfigDocument =
            serde_json::from_str(&content).map_err(ResendError::Serialization)?;
        tracing::debug!(path = %self.file.display(), "loaded config");
        Ok(Some(doc))
    }

    fn save(&self, doc: &ConfigDocument) -> Result<()> {
        let root = self
            .file
            .parent()
            .ok_or_else(|| ResendError::Store("Config path has no parent directory".to_string()))?;
        self.ensure_dir(root)?;

        let content = serde_json::to_string_pretty(doc).map_err(ResendError::Serialization)?;

        // Atomic write
        let tmp_file = root.join(format!(".config-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(ResendError::Io)?;
        restrict_permissions(&tmp_file)?;
        fs::rename(&tmp_file, &self.file).map_err(ResendError::Io)?;

        tracing::debug!(path = %self.file.display(), "saved config");
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.file.clone()
    }
}

/// The document holds API keys: owner read/write only.
#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(ResendError::Io)
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestEnv;
    use std::collections::BTreeMap;

    #[test]
    fn missing_file_loads_as_none() {
        let env = TestEnv::new();
        assert!(env.backend().load().unwrap().is_none());
    }

    #[test]
    fn empty_file_loads_as_none() {
        let env = TestEnv::new();
        fs::write(env.config_file(), "  \n").unwrap();
        assert!(env.backend().load().unwrap().is_none());
    }

    #[test]
    fn save_creates_directory_and_roundtrips() {
        let env = TestEnv::new();
        let nested = env.root.join("nested").join("dir").join("config.json");
        let backend = FsBackend::new(nested.clone());

        let mut keys = BTreeMap::new();
        keys.insert("work".to_string(), "re_work_123".to_string());
        let doc = ConfigDocument {
            keys: Some(keys),
            selected_key_name: Some("work".to_string()),
            ..Default::default()
        };
        backend.save(&doc).unwrap();

        assert!(nested.exists());
        assert_eq!(backend.load().unwrap(), Some(doc));
    }

    #[test]
    fn save_leaves_no_temp_files() {
        let env = TestEnv::new();
        env.backend().save(&ConfigDocument::default()).unwrap();
        env.backend().save(&ConfigDocument::default()).unwrap();

        let leftovers: Vec<_> = fs::read_dir(&env.root)
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn writes_camel_case_json() {
        let env = TestEnv::new();
        let doc = ConfigDocument {
            selected_key_name: Some("work".to_string()),
            last_version_check_at: Some(7),
            ..Default::default()
        };
        env.backend().save(&doc).unwrap();

        let raw = fs::read_to_string(env.config_file()).unwrap();
        assert!(raw.contains("\"selectedKeyName\": \"work\""));
        assert!(raw.contains("\"lastVersionCheckAt\": 7"));
    }

    #[test]
    fn keys_survive_a_fresh_store() {
        let env = TestEnv::new();
        {
            let store = env.store();
            let keyring = crate::keyring::Keyring::new(&store);
            keyring.save_key("work", "re_work").unwrap();
            keyring.select_key("work").unwrap();
        }

        let store = env.store();
        let keyring = crate::keyring::Keyring::new(&store);
        assert_eq!(keyring.selected_key_name().unwrap().as_deref(), Some("work"));
        assert_eq!(keyring.get_key("work").unwrap().as_deref(), Some("re_work"));
    }

    #[test]
    fn corrupt_file_is_a_serialization_error() {
        let env = TestEnv::new();
        fs::write(env.config_file(), "{not json").unwrap();
        let err = env.backend().load().unwrap_err();
        assert!(matches!(err, ResendError::Serialization(_)));
    }

    #[cfg(unix)]
    #[test]
    fn config_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;
        let env = TestEnv::new();
        env.backend().save(&ConfigDocument::default()).unwrap();
        let mode = fs::metadata(env.config_file()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}

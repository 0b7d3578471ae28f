use crate::paths::ConfigPaths;
use crate::store::fs_backend::FsBackend;
use crate::store::ConfigStore;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    pub _temp_dir: TempDir,
    pub root: PathBuf,
    pub paths: ConfigPaths,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let paths = ConfigPaths::in_dir(&root);
        Self {
            _temp_dir: temp_dir,
            root,
            paths,
        }
    }

    pub fn config_file(&self) -> PathBuf {
        self.paths.config_file()
    }

    pub fn backend(&self) -> FsBackend {
        FsBackend::from_paths(&self.paths)
    }

    pub fn store(&self) -> ConfigStore<FsBackend> {
        ConfigStore::new(self.backend())
    }
}

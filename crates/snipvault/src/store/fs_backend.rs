use super::backend::StorageBackend;
use crate::error::{Result, SnipError};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Filesystem backend: each key is one JSON document, `<root>/<key>.json`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// The platform data directory for snipvault (e.g. `~/.local/share/snipvault`).
    pub fn default_root() -> Result<PathBuf> {
        ProjectDirs::from("", "", "snipvault")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| SnipError::Store("No home directory available".to_string()))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(SnipError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn contains_key(&self, key: &str) -> bool {
        self.key_path(key).is_file()
    }

    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(SnipError::Io)?;
        Ok(Some(content))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;
        let target = self.key_path(key);

        let tmp_path = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_path, value).map_err(SnipError::Io)?;
        fs::rename(&tmp_path, target).map_err(SnipError::Io)?;

        Ok(())
    }

    fn persist(&self) -> Option<Result<()>> {
        Some(sync_documents(&self.root))
    }
}

fn sync_documents(root: &Path) -> Result<()> {
    if !root.exists() {
        return Ok(());
    }
    for entry in fs::read_dir(root).map_err(SnipError::Io)? {
        let path = entry.map_err(SnipError::Io)?.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            fs::OpenOptions::new()
                .write(true)
                .open(&path)
                .and_then(|file| file.sync_all())
                .map_err(SnipError::Io)?;
        }
    }
    Ok(())
}

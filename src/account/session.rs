use crate::core::{Result, StoreError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
}

/// The only state that survives a restart
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub user: Option<SessionUser>,
    pub is_authenticated: bool,
}

/// JSON file holding a [`SessionState`], replaced atomically on save
#[derive(Debug, Clone)]
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file means logged out
    pub fn load(&self) -> Result<SessionState> {
        if !self.path.exists() {
            return Ok(SessionState::default());
        }
        let data = fs::read_to_string(&self.path)
            .map_err(|e| StoreError::Session(format!("Failed to read session: {}", e)))?;
        serde_json::from_str(&data)
            .map_err(|e| StoreError::Session(format!("Failed to parse session: {}", e)))
    }

    pub fn save(&self, state: &SessionState) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)
            .map_err(|e| StoreError::Session(format!("Failed to create session directory: {}", e)))?;

        let json = serde_json::to_vec_pretty(state)
            .map_err(|e| StoreError::Session(format!("Failed to serialize session: {}", e)))?;

        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(&json)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)
            .map_err(|e| StoreError::Session(format!("Failed to persist session: {}", e)))?;
        Ok(())
    }
}

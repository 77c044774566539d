use super::CollectionStore;
use crate::error::{CatalogError, Result};
use crate::model::Game;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

const EMPTY_COLLECTION: &str = "[]";

/// Single-file JSON store.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Opens the store at `path`, creating an empty collection (and any
    /// missing parent directories) if the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self { path: path.into() };
        store.ensure_initialized()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_initialized(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.parent_dir() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(CatalogError::Io)?;
            }
        }
        fs::write(&self.path, EMPTY_COLLECTION).map_err(CatalogError::Io)?;
        info!(path = %self.path.display(), "initialized empty game collection");
        Ok(())
    }

    fn parent_dir(&self) -> Option<&Path> {
        self.path.parent().filter(|p| !p.as_os_str().is_empty())
    }
}

impl CollectionStore for FileStore {
    fn load(&self) -> Result<Vec<Game>> {
        self.ensure_initialized()?;
        let content = fs::read_to_string(&self.path).map_err(CatalogError::Io)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let games: Vec<Game> = serde_json::from_str(&content).map_err(CatalogError::Decode)?;
        Ok(games)
    }

    fn save(&self, games: &[Game]) -> Result<()> {
        let content = serde_json::to_string_pretty(games).map_err(CatalogError::Decode)?;

        // Atomic write: a crash mid-write must not leave a truncated collection
        let dir = self.parent_dir().unwrap_or_else(|| Path::new("."));
        let tmp_file = dir.join(format!(".games-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(CatalogError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(CatalogError::Io(e));
        }

        debug!(path = %self.path.display(), count = games.len(), "saved game collection");
        Ok(())
    }
}

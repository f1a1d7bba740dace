use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::config::AppConfig;
use crate::model::task::Task;

/// Error type for store I/O operations
#[derive(Debug, thiserror::Error)]
pub enum StoreIoError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    TasksParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not parse {path}: {source}")]
    ConfigParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("could not serialize task store: {0}")]
    SerializeError(#[from] serde_json::Error),
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

const TASKS_FILE: &str = "tasks.json";
const CONFIG_FILE: &str = "config.toml";

/// Resolve the store directory: explicit `-C` override, then $PRISM_DIR,
/// then $XDG_DATA_HOME/prism, then ~/.local/share/prism.
pub fn store_dir(override_dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir.to_path_buf();
    }
    if let Ok(dir) = std::env::var("PRISM_DIR")
        && !dir.is_empty()
    {
        return PathBuf::from(dir);
    }
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME")
        && !xdg.is_empty()
    {
        return PathBuf::from(xdg).join("prism");
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".local/share/prism")
}

/// Load the task list. A missing store file is an empty list.
pub fn load_tasks(dir: &Path) -> Result<Vec<Task>, StoreIoError> {
    let path = dir.join(TASKS_FILE);
    if !path.exists() {
        return Ok(Vec::new());
    }
    let text = fs::read_to_string(&path).map_err(|e| StoreIoError::ReadError {
        path: path.clone(),
        source: e,
    })?;
    serde_json::from_str(&text).map_err(|e| StoreIoError::TasksParseError { path, source: e })
}

/// Save the task list atomically (temp file + rename).
pub fn save_tasks(dir: &Path, tasks: &[Task]) -> Result<(), StoreIoError> {
    fs::create_dir_all(dir)?;
    let json = serde_json::to_string_pretty(tasks)?;
    atomic_write(&dir.join(TASKS_FILE), json.as_bytes())?;
    Ok(())
}

/// Load config.toml. A missing file yields the defaults.
pub fn load_config(dir: &Path) -> Result<AppConfig, StoreIoError> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let text = fs::read_to_string(&path).map_err(|e| StoreIoError::ReadError {
        path: path.clone(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| StoreIoError::ConfigParseError { path, source: e })
}

/// Write `content` to `path` atomically using a temp file + rename.
fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

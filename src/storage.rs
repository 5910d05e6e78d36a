use crate::models::Record;
use std::{env, path::Path, path::PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::{debug, error};

pub const DEFAULT_DATA_PATH: &str = "data/counter.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub fn resolve_data_path() -> PathBuf {
    match env::var("APP_DATA_PATH") {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_DATA_PATH),
    }
}

/// Reads the stored record. Anything short of a valid record yields the default.
pub async fn load_record(path: &Path) -> Record {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(record) => record,
            Err(err) => {
                error!("failed to parse data file {}: {err}", path.display());
                Record::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            debug!("no data file at {}, starting fresh", path.display());
            Record::default()
        }
        Err(err) => {
            error!("failed to read data file {}: {err}", path.display());
            Record::default()
        }
    }
}

/// Replaces the stored record through a temp file and rename.
pub async fn persist_record(path: &Path, record: &Record) -> Result<(), StoreError> {
    let payload = serde_json::to_vec_pretty(record)?;
    let write_err = |source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await.map_err(write_err)?;
    }

    let staging = temp_path(path);
    fs::write(&staging, payload).await.map_err(write_err)?;
    fs::rename(&staging, path).await.map_err(write_err)?;
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

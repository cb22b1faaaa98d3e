use crate::constants::DEFAULT_SNAPSHOT_PATH;
use crate::error::{DashError, Result};
use crate::types::DashboardSnapshot;
use std::path::{Path, PathBuf};
use tokio::fs as async_fs;
use tokio::io::{self, AsyncReadExt};
use tokio::task;

/// Where the snapshot JSON comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotSource {
    Stdin,
    File(PathBuf),
}

impl SnapshotSource {
    /// `-` reads stdin, a path reads that file, nothing falls back to the home directory
    pub fn from_arg(arg: Option<&str>) -> Result<Self> {
        match arg {
            Some("-") => Ok(SnapshotSource::Stdin),
            Some(path) => Ok(SnapshotSource::File(PathBuf::from(path))),
            None => default_snapshot_path().map(SnapshotSource::File),
        }
    }

    pub async fn load(&self) -> Result<DashboardSnapshot> {
        match self {
            SnapshotSource::Stdin => load_snapshot_from_stdin().await,
            SnapshotSource::File(path) => load_snapshot(path).await,
        }
    }
}

pub fn default_snapshot_path() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(DEFAULT_SNAPSHOT_PATH))
        .ok_or(DashError::HomeDirNotFound)
}

/// Read and parse a snapshot file
pub async fn load_snapshot(path: &Path) -> Result<DashboardSnapshot> {
    let content = async_fs::read_to_string(path)
        .await
        .map_err(|source| DashError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

    parse_snapshot(content, path.display().to_string()).await
}

pub async fn load_snapshot_from_stdin() -> Result<DashboardSnapshot> {
    let mut content = String::new();
    io::stdin().read_to_string(&mut content).await?;

    parse_snapshot(content, "stdin".to_string()).await
}

// Parsing runs off the runtime thread; snapshots can carry many invoices
async fn parse_snapshot(content: String, context: String) -> Result<DashboardSnapshot> {
    task::spawn_blocking(move || {
        serde_json::from_str(&content).map_err(|source| DashError::JsonParse { context, source })
    })
    .await?
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_load_snapshot_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"locale":"en-GB","currentPage":3,"totalPages":12,"revenue":[{{"month":"Jan","revenue":4200}}]}}"#
        )
        .unwrap();

        let snapshot = load_snapshot(file.path()).await.unwrap();

        assert_eq!(snapshot.locale.as_deref(), Some("en-GB"));
        assert_eq!(snapshot.current_page, 3);
        assert_eq!(snapshot.total_pages, 12);
        assert_eq!(snapshot.revenue.len(), 1);
        assert!(snapshot.invoices.is_empty());
    }

    #[tokio::test]
    async fn test_load_snapshot_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = load_snapshot(&path).await.unwrap_err();
        assert!(matches!(err, DashError::FileRead { path: ref p, .. } if *p == path));
    }

    #[tokio::test]
    async fn test_load_snapshot_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = load_snapshot(file.path()).await.unwrap_err();
        assert!(matches!(err, DashError::JsonParse { .. }));
    }

    #[tokio::test]
    async fn test_source_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{}}").unwrap();

        let source = SnapshotSource::from_arg(file.path().to_str()).unwrap();
        let snapshot = source.load().await.unwrap();
        assert_eq!(snapshot.current_page, 1);
    }

    #[test]
    fn test_source_from_arg() {
        assert_eq!(SnapshotSource::from_arg(Some("-")).unwrap(), SnapshotSource::Stdin);
        assert_eq!(
            SnapshotSource::from_arg(Some("data/snapshot.json")).unwrap(),
            SnapshotSource::File(PathBuf::from("data/snapshot.json"))
        );
    }
}

//! CLI command implementations.

pub mod adapters;
pub mod environments;
pub mod translate;
pub mod version;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use dbconf::file::DEFAULT_FILE;
use dbconf::{ConfigError, DatabaseFile};

use crate::error::{CliError, CliResult};

/// Resolve the application root and database file path from optional arguments.
///
/// A relative root is taken relative to the current directory.
pub(crate) fn resolve_paths(
    file: Option<PathBuf>,
    root: Option<PathBuf>,
) -> CliResult<(PathBuf, PathBuf)> {
    let root = match root {
        Some(root) => std::path::absolute(root)?,
        None => std::env::current_dir()?,
    };
    let file = file.unwrap_or_else(|| root.join(DEFAULT_FILE));
    Ok((root, file))
}

/// Read and parse a database file.
pub(crate) async fn load_database_file(path: &Path) -> CliResult<DatabaseFile> {
    let owned = path.to_path_buf();
    let loaded = tokio::task::spawn_blocking(move || DatabaseFile::load(owned))
        .await
        .map_err(|e| CliError::Config(format!("Failed to load database file: {}", e)))?;

    match loaded {
        Err(ConfigError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => Err(
            CliError::Config(format!("Database file not found: {}", path.display())),
        ),
        other => Ok(other?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_paths_absolutizes_relative_root() {
        let cwd = std::env::current_dir().unwrap();

        let (root, file) = resolve_paths(None, Some(PathBuf::from("app"))).unwrap();
        assert_eq!(root, cwd.join("app"));
        assert!(root.is_absolute());
        assert_eq!(file, cwd.join("app").join(DEFAULT_FILE));

        let (root, _) = resolve_paths(None, Some(PathBuf::from("."))).unwrap();
        assert_eq!(root, cwd);

        let (root, _) = resolve_paths(None, None).unwrap();
        assert_eq!(root, cwd);
    }

    #[test]
    fn test_resolve_paths_keeps_explicit_file() {
        let cwd = std::env::current_dir().unwrap();
        let (_, file) =
            resolve_paths(Some(PathBuf::from("db.toml")), Some(cwd.clone())).unwrap();
        assert_eq!(file, PathBuf::from("db.toml"));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_database_file(&dir.path().join("database.toml"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Database file not found"));
    }
}

//! Marker file written by the file-writing echo script.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

pub const MARKER_FILE_NAME: &str = "example.txt";

#[derive(Debug, Error)]
pub enum MarkerError {
    #[error("failed to create directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Which branch [`ensure_directory`] took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryState {
    Created,
    Existing,
}

/// Make sure `dir` exists, creating it and any missing ancestors.
pub fn ensure_directory(dir: &Path) -> Result<DirectoryState, MarkerError> {
    if dir.is_dir() {
        return Ok(DirectoryState::Existing);
    }

    fs::create_dir_all(dir).map_err(|source| MarkerError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    debug!(path = %dir.display(), "created marker directory");
    Ok(DirectoryState::Created)
}

/// Result of a successful marker write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerFile {
    pub path: PathBuf,
    pub id: Uuid,
}

/// Create or truncate `<dir>/example.txt` and write a fresh v4 UUID into it.
///
/// The handle is flushed and synced before returning, and closed on every path.
pub fn write_marker(dir: &Path) -> Result<MarkerFile, MarkerError> {
    let path = dir.join(MARKER_FILE_NAME);
    let id = Uuid::new_v4();

    let write = |path: &Path| -> io::Result<()> {
        let mut file = File::create(path)?;
        file.write_all(id.hyphenated().to_string().as_bytes())?;
        file.flush()?;
        file.sync_all()
    };
    write(path.as_path()).map_err(|source| MarkerError::Write {
        path: path.clone(),
        source,
    })?;

    Ok(MarkerFile { path, id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_nested_directory_once() {
        let temp = tempdir().expect("tempdir");
        let dir = temp.path().join("a").join("b");

        assert_eq!(ensure_directory(&dir).expect("create"), DirectoryState::Created);
        assert_eq!(ensure_directory(&dir).expect("exists"), DirectoryState::Existing);
    }

    #[test]
    fn overwrites_marker_with_new_id() {
        let temp = tempdir().expect("tempdir");
        let first = write_marker(temp.path()).expect("first write");
        let second = write_marker(temp.path()).expect("second write");

        assert_ne!(first.id, second.id);
        let content = fs::read_to_string(&second.path).expect("read marker");
        assert_eq!(Uuid::parse_str(&content).expect("uuid"), second.id);
    }

    #[test]
    fn reports_path_when_directory_is_a_file() {
        let temp = tempdir().expect("tempdir");
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, b"x").expect("write blocker");

        let err = ensure_directory(&blocker.join("child")).expect_err("must fail");
        assert!(matches!(err, MarkerError::CreateDir { .. }));
    }
}

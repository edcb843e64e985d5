//! Error type shared by every store operation.
//!
//! The store distinguishes only a handful of failure kinds:
//!
//! - [`StoreError::NotFound`]: the entry file (or the namespace directory being
//!   listed) does not exist.
//! - [`StoreError::Io`] / [`StoreError::WorkingDirectory`]: any other
//!   filesystem failure, such as permission denied or a full disk.
//! - [`StoreError::HomeResolution`]: the platform could not tell us where the
//!   home directory is.  On Unix an unset `HOME` never produces this variant.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type StoreResult<T> = Result<T, StoreError>;

/// Error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested file or directory does not exist.
    #[error("not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// A file system I/O error other than "not found".
    #[error("I/O error accessing {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The platform home directory lookup failed.
    #[error("could not determine the home directory")]
    HomeResolution,

    /// The current working directory could not be read.
    #[error("could not determine the current working directory: {source}")]
    WorkingDirectory {
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    /// Classifies an I/O error raised while touching `path`.
    ///
    /// `ErrorKind::NotFound` becomes [`StoreError::NotFound`]; everything else
    /// is wrapped as [`StoreError::Io`].
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    /// Returns `true` for [`StoreError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// The path the failing operation was working on, when there is one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::NotFound { path } | Self::Io { path, .. } => Some(path),
            Self::HomeResolution | Self::WorkingDirectory { .. } => None,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io_maps_not_found_kind_to_not_found_variant() {
        // Arrange
        let source = io::Error::from(io::ErrorKind::NotFound);

        // Act
        let err = StoreError::from_io(Path::new("/tmp/x/y"), source);

        // Assert
        assert!(err.is_not_found());
        assert_eq!(err.path(), Some(Path::new("/tmp/x/y")));
    }

    #[test]
    fn test_from_io_maps_permission_denied_to_io_variant() {
        let source = io::Error::from(io::ErrorKind::PermissionDenied);

        let err = StoreError::from_io(Path::new("/root/secret"), source);

        assert!(!err.is_not_found());
        match err {
            StoreError::Io { path, source } => {
                assert_eq!(path, PathBuf::from("/root/secret"));
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn test_display_includes_path() {
        let err = StoreError::NotFound {
            path: PathBuf::from("/home/u/.tool/profiles/default"),
        };

        assert_eq!(
            err.to_string(),
            "not found: /home/u/.tool/profiles/default"
        );
    }

    #[test]
    fn test_home_resolution_has_no_path() {
        assert_eq!(StoreError::HomeResolution.path(), None);
    }
}

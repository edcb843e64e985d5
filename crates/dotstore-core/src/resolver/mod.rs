//! Home and working directory resolution.
//!
//! Every store operation asks a [`DirectoryResolver`] where the two scope
//! roots live.  Nothing is cached: the resolver is consulted on every call so
//! a changed `HOME` or working directory takes effect immediately.
//!
//! # Platform implementations
//!
//! The native resolver is selected at compile time and re-exported as
//! [`SystemResolver`]:
//!
//! | Module     | Targets        | Home directory source             |
//! |------------|----------------|-----------------------------------|
//! | `unix`     | `cfg(unix)`    | the `HOME` variable, read as-is   |
//! | `portable` | everything else| `dirs::home_dir()` (Known Folders) |
//!
//! [`FixedResolver`] is always compiled so tests and embedders can pin both
//! directories without touching process-global state.

use std::path::PathBuf;

use crate::domain::{StoreError, StoreResult};

/// Answers "where is home?" and "where am I?" for the store.
#[cfg_attr(test, mockall::automock)]
pub trait DirectoryResolver: Send + Sync {
    /// Base directory of the global scope.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::HomeResolution`] when the platform lookup fails.
    fn home_dir(&self) -> StoreResult<PathBuf>;

    /// Base directory of the local scope.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::WorkingDirectory`] when the working directory
    /// cannot be read (for example, it was deleted).
    fn current_dir(&self) -> StoreResult<PathBuf>;
}

/// Reads the process working directory.
pub(crate) fn process_current_dir() -> StoreResult<PathBuf> {
    std::env::current_dir().map_err(|source| StoreError::WorkingDirectory { source })
}

// ── Unix implementation ───────────────────────────────────────────────────────

#[cfg(unix)]
pub mod unix;

/// Re-export the Unix resolver as `SystemResolver` on Unix targets.
#[cfg(unix)]
pub use unix::UnixResolver as SystemResolver;

// ── Everything else ───────────────────────────────────────────────────────────

#[cfg(not(unix))]
pub mod portable;

/// Re-export the `dirs`-backed resolver as `SystemResolver` on non-Unix targets.
#[cfg(not(unix))]
pub use portable::PortableResolver as SystemResolver;

// ── Fixed implementation (always compiled) ────────────────────────────────────

/// A resolver that returns directories chosen at construction time.
///
/// A `home` of `None` simulates a platform whose home lookup fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedResolver {
    pub home: Option<PathBuf>,
    pub cwd: PathBuf,
}

impl FixedResolver {
    pub fn new(home: impl Into<PathBuf>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
            cwd: cwd.into(),
        }
    }

    /// A resolver whose home lookup always fails.
    pub fn without_home(cwd: impl Into<PathBuf>) -> Self {
        Self {
            home: None,
            cwd: cwd.into(),
        }
    }
}

impl DirectoryResolver for FixedResolver {
    fn home_dir(&self) -> StoreResult<PathBuf> {
        self.home.clone().ok_or(StoreError::HomeResolution)
    }

    fn current_dir(&self) -> StoreResult<PathBuf> {
        Ok(self.cwd.clone())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

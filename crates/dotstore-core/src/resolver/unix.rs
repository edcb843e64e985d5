//! Unix directory resolution.
//!
//! The home directory is the `HOME` environment variable, taken verbatim.  No
//! passwd lookup, no existence check.  When `HOME` is unset the home path is
//! empty, so the global root degrades to the relative path `.<base>` and any
//! resulting failure shows up later as an ordinary filesystem error.

use std::path::PathBuf;

use super::{process_current_dir, DirectoryResolver};
use crate::domain::StoreResult;

/// Unix implementation of [`DirectoryResolver`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnixResolver;

impl UnixResolver {
    pub fn new() -> Self {
        Self
    }
}

impl DirectoryResolver for UnixResolver {
    fn home_dir(&self) -> StoreResult<PathBuf> {
        Ok(std::env::var_os("HOME").map(PathBuf::from).unwrap_or_default())
    }

    fn current_dir(&self) -> StoreResult<PathBuf> {
        process_current_dir()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

//! Directory resolution for non-Unix targets (Windows and friends).
//!
//! Delegates to `dirs::home_dir()`, which uses the Known Folder API on
//! Windows.  Unlike the Unix resolver, a failed lookup is reported as
//! [`StoreError::HomeResolution`].

use std::path::PathBuf;

use super::{process_current_dir, DirectoryResolver};
use crate::domain::{StoreError, StoreResult};

/// `dirs`-backed implementation of [`DirectoryResolver`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PortableResolver;

impl PortableResolver {
    pub fn new() -> Self {
        Self
    }
}

impl DirectoryResolver for PortableResolver {
    fn home_dir(&self) -> StoreResult<PathBuf> {
        dirs::home_dir().ok_or(StoreError::HomeResolution)
    }

    fn current_dir(&self) -> StoreResult<PathBuf> {
        process_current_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portable_resolver_agrees_with_dirs() {
        let result = PortableResolver::new().home_dir();
        match dirs::home_dir() {
            Some(home) => assert_eq!(result.unwrap(), home),
            None => assert!(matches!(result, Err(StoreError::HomeResolution))),
        }
    }
}

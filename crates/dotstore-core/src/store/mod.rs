//! The scoped key/value store.
//!
//! Each entry is one file:
//!
//! ```text
//! <root>/.<base>/<namespace>/<key>      -- raw value as text
//! ```
//!
//! where `<root>` is the working directory (local scope) or the home
//! directory (global scope).  The unqualified operations (`save`, `load`,
//! `delete`, `list`) target the global scope.  The `*_local_or_global`
//! operations try the local scope first and fall back to the global one on
//! any local failure, reporting only the global outcome.
//!
//! # Example
//!
//! ```rust
//! use dotstore_core::{FixedResolver, ScopedStore};
//!
//! let scratch = std::env::temp_dir().join(format!("dotstore_doc_{}", std::process::id()));
//! let store = ScopedStore::with_resolver("tool", FixedResolver::new(&scratch, &scratch));
//!
//! store.save_global("profiles", "default", "region=us-east-1").unwrap();
//! assert_eq!(store.load("profiles", "default").unwrap(), "region=us-east-1");
//! assert_eq!(store.list("profiles").unwrap(), vec!["default".to_string()]);
//!
//! std::fs::remove_dir_all(&scratch).ok();
//! ```

pub mod fs;

use std::path::PathBuf;

use tracing::debug;

use crate::domain::{Resolved, Scope, StoreResult};
use crate::resolver::{DirectoryResolver, SystemResolver};

/// A key/value store rooted at `.<base>` under the working and home
/// directories.
///
/// The store holds no open handles and no cached paths; it can be shared by
/// reference freely.
#[derive(Debug, Clone)]
pub struct ScopedStore<R = SystemResolver> {
    base: String,
    resolver: R,
}

impl ScopedStore<SystemResolver> {
    /// Creates a store for `base` using the platform resolver.  No I/O.
    pub fn new(base: impl Into<String>) -> Self {
        Self::with_resolver(base, SystemResolver::default())
    }
}

impl<R: DirectoryResolver> ScopedStore<R> {
    /// Creates a store for `base` that asks `resolver` for its roots.
    pub fn with_resolver(base: impl Into<String>, resolver: R) -> Self {
        Self {
            base: base.into(),
            resolver,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    // ── Path resolution ───────────────────────────────────────────────────────

    /// Resolves `<cwd>/.<base>` or `<home>/.<base>`.  Recomputed on every call.
    ///
    /// # Errors
    ///
    /// Propagates the resolver's error for the requested scope.
    pub fn root(&self, scope: Scope) -> StoreResult<PathBuf> {
        let dir = match scope {
            Scope::Local => self.resolver.current_dir()?,
            Scope::Global => self.resolver.home_dir()?,
        };
        Ok(dir.join(format!(".{}", self.base)))
    }

    /// Path of the directory holding every key of `namespace`.
    pub fn namespace_dir(&self, scope: Scope, namespace: &str) -> StoreResult<PathBuf> {
        Ok(self.root(scope)?.join(namespace))
    }

    /// Path of the file backing `(namespace, key)` in `scope`.
    pub fn entry_path(&self, scope: Scope, namespace: &str, key: &str) -> StoreResult<PathBuf> {
        Ok(self.namespace_dir(scope, namespace)?.join(key))
    }

    // ── Scope-generic operations ──────────────────────────────────────────────

    /// Sorted key names of `namespace` in `scope`.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`](crate::StoreError::NotFound) if the namespace
    /// directory does not exist; [`StoreError::Io`](crate::StoreError::Io)
    /// for other failures.
    pub fn list_in(&self, scope: Scope, namespace: &str) -> StoreResult<Vec<String>> {
        let dir = self.namespace_dir(scope, namespace)?;
        fs::list_names(&dir)
    }

    /// Writes `value` under `(namespace, key)` in `scope`, creating the
    /// namespace directory as needed and overwriting any previous value.
    pub fn save_in(&self, scope: Scope, namespace: &str, key: &str, value: &str) -> StoreResult<()> {
        let path = self.entry_path(scope, namespace, key)?;
        fs::write_entry(&path, value)?;
        debug!(%scope, namespace, key, path = %path.display(), "saved entry");
        Ok(())
    }

    /// Reads the value of `(namespace, key)` in `scope`.
    pub fn load_from(&self, scope: Scope, namespace: &str, key: &str) -> StoreResult<String> {
        let path = self.entry_path(scope, namespace, key)?;
        fs::read_entry(&path)
    }

    /// Removes `(namespace, key)` from `scope`.
    pub fn delete_from(&self, scope: Scope, namespace: &str, key: &str) -> StoreResult<()> {
        let path = self.entry_path(scope, namespace, key)?;
        fs::remove_entry(&path)?;
        debug!(%scope, namespace, key, path = %path.display(), "deleted entry");
        Ok(())
    }

    // ── Listing ───────────────────────────────────────────────────────────────

    /// Sorted keys of `namespace` in the global scope.
    pub fn list(&self, namespace: &str) -> StoreResult<Vec<String>> {
        self.list_in(Scope::Global, namespace)
    }

    /// Sorted keys of `namespace` in the local scope.
    pub fn list_local(&self, namespace: &str) -> StoreResult<Vec<String>> {
        self.list_in(Scope::Local, namespace)
    }

    // ── Saving ────────────────────────────────────────────────────────────────

    /// Same as [`save_global`](Self::save_global).
    pub fn save(&self, namespace: &str, key: &str, value: &str) -> StoreResult<()> {
        self.save_global(namespace, key, value)
    }

    pub fn save_global(&self, namespace: &str, key: &str, value: &str) -> StoreResult<()> {
        self.save_in(Scope::Global, namespace, key, value)
    }

    pub fn save_local(&self, namespace: &str, key: &str, value: &str) -> StoreResult<()> {
        self.save_in(Scope::Local, namespace, key, value)
    }

    // ── Loading ───────────────────────────────────────────────────────────────

    /// Same as [`load_global`](Self::load_global).
    pub fn load(&self, namespace: &str, key: &str) -> StoreResult<String> {
        self.load_global(namespace, key)
    }

    pub fn load_global(&self, namespace: &str, key: &str) -> StoreResult<String> {
        self.load_from(Scope::Global, namespace, key)
    }

    /// Local value if readable, otherwise the global lookup's outcome.
    pub fn load_local_or_global(&self, namespace: &str, key: &str) -> StoreResult<String> {
        self.load_resolved(namespace, key).map(|resolved| resolved.value)
    }

    /// Like [`load_local_or_global`](Self::load_local_or_global), but also
    /// reports which scope supplied the value.
    ///
    /// Any local failure (missing file, unreadable working directory,
    /// permission error) triggers the global lookup.  The local error is
    /// discarded; only the global result is returned.
    pub fn load_resolved(&self, namespace: &str, key: &str) -> StoreResult<Resolved> {
        match self.load_from(Scope::Local, namespace, key) {
            Ok(value) => Ok(Resolved {
                scope: Scope::Local,
                value,
            }),
            Err(local_err) => {
                debug!(namespace, key, error = %local_err, "local lookup failed, trying global");
                self.load_global(namespace, key).map(|value| Resolved {
                    scope: Scope::Global,
                    value,
                })
            }
        }
    }

    // ── Deleting ──────────────────────────────────────────────────────────────

    /// Same as [`delete_global`](Self::delete_global).
    pub fn delete(&self, namespace: &str, key: &str) -> StoreResult<()> {
        self.delete_global(namespace, key)
    }

    pub fn delete_global(&self, namespace: &str, key: &str) -> StoreResult<()> {
        self.delete_from(Scope::Global, namespace, key)
    }

    /// Removes the local file if possible, otherwise the global one.
    pub fn delete_local_or_global(&self, namespace: &str, key: &str) -> StoreResult<()> {
        self.delete_local_or_global_resolved(namespace, key)
            .map(|_| ())
    }

    /// Like [`delete_local_or_global`](Self::delete_local_or_global), returning
    /// the scope whose file was removed.
    pub fn delete_local_or_global_resolved(&self, namespace: &str, key: &str) -> StoreResult<Scope> {
        match self.delete_from(Scope::Local, namespace, key) {
            Ok(()) => Ok(Scope::Local),
            Err(local_err) => {
                debug!(namespace, key, error = %local_err, "local delete failed, trying global");
                self.delete_global(namespace, key).map(|()| Scope::Global)
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

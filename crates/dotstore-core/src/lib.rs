//! # dotstore-core
//!
//! A small key/value configuration store that keeps every value in its own
//! file, under a hidden per-application directory.  Values can live in one of
//! two scopes:
//!
//! - **global**: `<home>/.<base>/<namespace>/<key>`
//! - **local**: `<cwd>/.<base>/<namespace>/<key>`
//!
//! Lookups and deletes can prefer the local scope and fall back to the global
//! one, which lets a project directory override a user-wide setting.
//!
//! The crate is organised as:
//!
//! - **`domain`**: [`Scope`], [`Resolved`] and [`StoreError`].  No I/O.
//! - **`resolver`**: the [`DirectoryResolver`] trait and the per-platform
//!   [`SystemResolver`] that locates the home and working directories.
//! - **`store`**: [`ScopedStore`] and the filesystem primitives it uses.
//!
//! All operations are synchronous and hit the filesystem directly.  There is
//! no cache and no locking; concurrent writers race and the last one wins.

pub mod domain;
pub mod resolver;
pub mod store;

pub use domain::{ParseScopeError, Resolved, Scope, StoreError, StoreResult};
pub use resolver::{DirectoryResolver, FixedResolver, SystemResolver};
pub use store::ScopedStore;

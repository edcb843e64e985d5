//! Domain types: scopes, fallback results and the store error.
//!
//! Nothing in here touches the filesystem or the environment.

pub mod error;
pub mod scope;

pub use error::{StoreError, StoreResult};
pub use scope::{ParseScopeError, Resolved, Scope};

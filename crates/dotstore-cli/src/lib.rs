//! dotstore-cli library crate.
//!
//! Shared by the `dotstore` binary and its tests:
//!
//! - `cli`: clap argument definitions.
//! - `commands`: runs a parsed command against a [`dotstore_core::ScopedStore`]
//!   and renders the result as text, JSON or TOML.

pub mod cli;
pub mod commands;
